/// Visual placement of a single carousel item, relative to the center of the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ItemTransform {
    /// Index of the item in the selected collection.
    pub index: usize,
    /// Horizontal translation from the carousel's center, in CSS pixels.
    pub translate_x: f64,
    /// Scale factor, `1.` being the item's natural size.
    pub scale: f64,
    /// Opacity, from `0.` (invisible) to `1.` (fully opaque).
    pub opacity: f64,
    /// Stacking order: items with a higher value are rendered on top.
    pub z_index: u32,
    /// `true` for the active item.
    pub is_active: bool,
}

/// Parameters of the curve applied to items the further they are from the active one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LayoutParameters {
    /// Scale of the active item.
    pub active_scale: f64,
    /// Scale removed for each slot of distance to the active item.
    pub scale_step: f64,
    /// Scale under which an item never goes.
    pub scale_floor: f64,
    /// Opacity removed for each slot of distance to the active item.
    pub opacity_step: f64,
    /// Opacity under which an item never goes.
    pub opacity_floor: f64,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            active_scale: 1.05,
            scale_step: 0.3,
            scale_floor: 0.6,
            opacity_step: 0.5,
            opacity_floor: 0.2,
        }
    }
}

/// Distance separating two neighboring slots.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SlotSpacing {
    /// Fixed distance in CSS pixels.
    Fixed(f64),
    /// Ratio of the viewport's width.
    ViewportRatio(f64),
}

/// Slot spacing applied from a minimum viewport width, sorted from the widest breakpoint.
const BREAKPOINTS: [(f64, SlotSpacing); 3] = [
    (1024., SlotSpacing::Fixed(450.)),
    (768., SlotSpacing::ViewportRatio(0.45)),
    (640., SlotSpacing::ViewportRatio(0.40)),
];

/// Slot spacing for viewports narrower than every breakpoint.
const NARROW_SPACING: SlotSpacing = SlotSpacing::ViewportRatio(0.35);

/// Returns the horizontal distance, in CSS pixels, between the centers of two neighboring
/// items for the given viewport width.
pub(crate) fn slot_spacing(viewport_width: f64) -> f64 {
    let spacing = BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, spacing)| *spacing)
        .unwrap_or(NARROW_SPACING);
    match spacing {
        SlotSpacing::Fixed(px) => px,
        SlotSpacing::ViewportRatio(ratio) => ratio * viewport_width.max(0.),
    }
}

/// Compute the transform of every item of a collection of `item_count` items, where the
/// item at `active_index` is the active one.
///
/// The active item is centered, at `active_scale` and fully opaque. Other items are
/// translated proportionally to their offset from it, with a scale and opacity
/// decreasing with that offset down to their respective floors. Items closer to the
/// center are always stacked above farther ones.
pub(crate) fn compute_transforms(
    item_count: usize,
    active_index: usize,
    viewport_width: f64,
    params: &LayoutParameters,
) -> Vec<ItemTransform> {
    let spacing = slot_spacing(viewport_width);
    (0..item_count)
        .map(|index| {
            let offset = index as f64 - active_index as f64;
            let distance = offset.abs();
            ItemTransform {
                index,
                translate_x: offset * spacing,
                scale: (params.active_scale - params.scale_step * distance)
                    .max(params.scale_floor),
                opacity: (1. - params.opacity_step * distance).max(params.opacity_floor),
                z_index: item_count.saturating_sub(index.abs_diff(active_index)) as u32,
                is_active: index == active_index,
            }
        })
        .collect()
}
