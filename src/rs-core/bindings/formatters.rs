use crate::layout::ItemTransform;

/// Number of `f64` values describing a single item in `format_transforms_for_js`.
pub(crate) const TRANSFORM_STRIDE: usize = 6;

/// Flatten transforms into the format expected by `jsUpdateTransforms`:
///
///   - first the number of transforms
///   - then, for each one of them, in order: its index, its horizontal translation, its
///     scale, its opacity, its z-index and `1.` if it is the active item (`0.` otherwise).
pub(crate) fn format_transforms_for_js(transforms: &[ItemTransform]) -> Vec<f64> {
    let mut ret: Vec<f64> = Vec::with_capacity(1 + transforms.len() * TRANSFORM_STRIDE);
    ret.push(transforms.len() as f64);
    transforms.iter().for_each(|t| {
        ret.push(t.index as f64);
        ret.push(t.translate_x);
        ret.push(t.scale);
        ret.push(t.opacity);
        ret.push(f64::from(t.z_index));
        ret.push(if t.is_active { 1. } else { 0. });
    });
    ret
}
