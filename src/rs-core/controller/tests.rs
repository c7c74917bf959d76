use super::*;

fn collection(id: &str, len: usize) -> Collection {
    let items = (0..len)
        .map(|i| {
            MediaItem::new(
                format!("https://example.com/{id}/{i}.mp4"),
                format!("{id} {i}"),
                format!("Item {i} of {id}"),
            )
        })
        .collect();
    Collection::new(id.to_string(), id.to_uppercase(), format!("All about {id}"))
        .with_items(items)
}

fn controller_with(len: usize) -> CarouselController {
    let mut controller = CarouselController::new(CarouselConfiguration::default());
    controller.handle(CarouselEvent::SelectCollection(collection("works", len)));
    controller
}

fn ready(controller: &mut CarouselController, index: usize) -> Vec<Directive> {
    let generation = controller.generation();
    controller.handle(CarouselEvent::ItemReady { generation, index })
}

fn contains(directives: &[Directive], wanted: &Directive) -> bool {
    directives.iter().any(|d| d == wanted)
}

fn playing_indexes(controller: &CarouselController) -> Vec<usize> {
    (0..controller.readiness().len())
        .filter(|i| controller.should_play(*i))
        .collect()
}

#[test]
fn test_first_selection() {
    let mut controller = CarouselController::new(CarouselConfiguration::default());
    assert_eq!(controller.active_index(), None);
    let directives = controller.handle(CarouselEvent::SelectCollection(collection("works", 3)));
    assert!(matches!(
        &directives[0],
        Directive::MountCollection {
            generation: 1,
            name,
            description,
            items,
        } if name == "WORKS" && description == "All about works" && items.len() == 3
    ));
    assert!(contains(
        &directives,
        &Directive::SetPlaying {
            index: 0,
            playing: true
        }
    ));
    assert!(contains(
        &directives,
        &Directive::UpdateNavigationState {
            can_go_previous: false,
            can_go_next: true
        }
    ));
    assert!(contains(
        &directives,
        &Directive::AnnounceActiveItem {
            index: 0,
            title: "works 0".to_string(),
            description: "Item 0 of works".to_string(),
        }
    ));
    assert!(!contains(&directives, &Directive::ScrollIntoView));
    assert_eq!(controller.readiness(), &[false, false, false]);
    assert_eq!(controller.muted(), &[true, true, true]);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.selected_collection().map(|c| c.id()), Some("works"));
}

#[test]
fn test_later_selections_scroll_into_view() {
    let mut controller = controller_with(3);
    let directives = controller.handle(CarouselEvent::SelectCollection(collection("orbit", 2)));
    assert_eq!(directives.last(), Some(&Directive::ScrollIntoView));
    assert_eq!(controller.generation(), 2);

    // Re-selecting the same collection
    let directives = controller.handle(CarouselEvent::SelectCollection(collection("orbit", 2)));
    assert_eq!(directives.last(), Some(&Directive::ScrollIntoView));
    assert_eq!(controller.generation(), 3);
}

#[test]
fn test_collection_change_resets_everything() {
    let mut controller = controller_with(4);
    ready(&mut controller, 0);
    ready(&mut controller, 1);
    controller.handle(CarouselEvent::ToggleMute);
    controller.handle(CarouselEvent::Navigate(Direction::Next));
    controller.handle(CarouselEvent::ToggleMute);
    assert_eq!(controller.muted(), &[false, false, true, true]);

    let directives = controller.handle(CarouselEvent::SelectCollection(collection("works", 4)));
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.readiness(), &[false; 4]);
    assert_eq!(controller.muted(), &[true; 4]);
    assert!(!controller.is_volume_indicator_visible());
    assert!(contains(&directives, &Directive::HideVolumeIndicator));
}

#[test]
fn test_navigation_is_clamped() {
    let mut controller = controller_with(3);
    assert!(controller
        .handle(CarouselEvent::Navigate(Direction::Previous))
        .is_empty());
    assert_eq!(controller.current_index(), 0);

    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert_eq!(
        &directives[..2],
        &[
            Directive::SetPlaying {
                index: 0,
                playing: false
            },
            Directive::Seek {
                index: 0,
                position: 0.
            },
        ]
    );
    assert!(contains(
        &directives,
        &Directive::SetPlaying {
            index: 1,
            playing: true
        }
    ));
    controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert_eq!(controller.current_index(), 2);
    assert!(controller.can_go_previous());
    assert!(!controller.can_go_next());

    assert!(controller
        .handle(CarouselEvent::Navigate(Direction::Next))
        .is_empty());
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn test_go_to() {
    let mut controller = controller_with(5);
    let directives = controller.handle(CarouselEvent::GoTo(3));
    assert_eq!(controller.current_index(), 3);
    assert!(contains(
        &directives,
        &Directive::UpdateNavigationState {
            can_go_previous: true,
            can_go_next: true
        }
    ));
    assert!(controller.handle(CarouselEvent::GoTo(3)).is_empty());
    assert!(controller.handle(CarouselEvent::GoTo(5)).is_empty());
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn test_keyboard_navigation() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::KeyDown(NavigationKey::from_key("ArrowRight")));
    assert_eq!(controller.current_index(), 1);
    controller.handle(CarouselEvent::KeyDown(NavigationKey::from_key("ArrowLeft")));
    assert_eq!(controller.current_index(), 0);
    assert!(controller
        .handle(CarouselEvent::KeyDown(NavigationKey::from_key("Enter")))
        .is_empty());
}

#[test]
fn test_toggle_mute_on_unready_item() {
    let mut controller = controller_with(3);
    assert!(controller.handle(CarouselEvent::ToggleMute).is_empty());
    assert_eq!(controller.muted(), &[true, true, true]);
    assert!(!controller.is_volume_indicator_visible());
}

#[test]
fn test_toggle_mute_on_ready_item() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);
    let directives = controller.handle(CarouselEvent::ToggleMute);
    assert_eq!(
        directives,
        vec![
            Directive::SetVolume {
                index: 0,
                volume: 1.
            },
            Directive::ShowVolumeIndicator { muted: false },
            Directive::ScheduleVolumeIndicatorHide {
                token: 1,
                delay: 1000.
            },
        ]
    );
    assert_eq!(controller.muted(), &[false, true, true]);
    assert!(!controller.should_be_muted(0));

    let directives = controller.handle(CarouselEvent::ToggleMute);
    assert_eq!(
        directives[0],
        Directive::SetVolume {
            index: 0,
            volume: 0.
        }
    );
    assert_eq!(controller.muted(), &[true, true, true]);
}

#[test]
fn test_volume_indicator_hide_is_superseded() {
    let mut controller = controller_with(2);
    ready(&mut controller, 0);
    controller.handle(CarouselEvent::ToggleMute);
    controller.handle(CarouselEvent::ToggleMute);
    assert!(controller
        .handle(CarouselEvent::VolumeIndicatorElapsed { token: 1 })
        .is_empty());
    assert!(controller.is_volume_indicator_visible());
    assert_eq!(
        controller.handle(CarouselEvent::VolumeIndicatorElapsed { token: 2 }),
        vec![Directive::HideVolumeIndicator]
    );
    assert!(!controller.is_volume_indicator_visible());
}

#[test]
fn test_navigation_hides_volume_indicator() {
    let mut controller = controller_with(2);
    ready(&mut controller, 0);
    controller.handle(CarouselEvent::ToggleMute);
    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(contains(&directives, &Directive::CancelVolumeIndicatorHide));
    assert!(contains(&directives, &Directive::HideVolumeIndicator));
    assert!(!controller.is_volume_indicator_visible());
    assert!(controller
        .handle(CarouselEvent::VolumeIndicatorElapsed { token: 1 })
        .is_empty());
}

#[test]
fn test_mute_persists_across_navigation() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);
    ready(&mut controller, 1);
    controller.handle(CarouselEvent::ToggleMute);
    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(contains(
        &directives,
        &Directive::SetVolume {
            index: 1,
            volume: 0.
        }
    ));
    let directives = controller.handle(CarouselEvent::Navigate(Direction::Previous));
    assert!(contains(
        &directives,
        &Directive::SetVolume {
            index: 0,
            volume: 1.
        }
    ));
    assert_eq!(controller.muted(), &[false, true, true]);
}

#[test]
fn test_readiness_of_non_active_item() {
    let mut controller = controller_with(3);
    assert!(ready(&mut controller, 2).is_empty());
    assert_eq!(controller.readiness(), &[false, false, true]);
}

#[test]
fn test_readiness_of_active_item() {
    let mut controller = controller_with(3);
    assert_eq!(
        ready(&mut controller, 0),
        vec![
            Directive::SetVolume {
                index: 0,
                volume: 0.
            },
            Directive::SetPlaying {
                index: 0,
                playing: true
            },
        ]
    );
    assert!(ready(&mut controller, 7).is_empty());
    assert_eq!(controller.readiness(), &[true, false, false]);
}

#[test]
fn test_stale_readiness_is_dropped() {
    let mut controller = controller_with(3);
    let stale_generation = controller.generation();
    controller.handle(CarouselEvent::SelectCollection(collection("orbit", 3)));
    assert!(controller
        .handle(CarouselEvent::ItemReady {
            generation: stale_generation,
            index: 0
        })
        .is_empty());
    assert_eq!(controller.readiness(), &[false, false, false]);
}

#[test]
fn test_hidden_carousel() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);
    controller.handle(CarouselEvent::ToggleMute);
    assert!(controller
        .handle(CarouselEvent::IntersectionChange { ratio: 0.7 })
        .is_empty());

    let directives = controller.handle(CarouselEvent::IntersectionChange { ratio: 0.2 });
    assert!(contains(
        &directives,
        &Directive::SetPlaying {
            index: 0,
            playing: false
        }
    ));
    assert!(contains(
        &directives,
        &Directive::Seek {
            index: 0,
            position: 0.
        }
    ));
    assert!(contains(
        &directives,
        &Directive::SetVolume {
            index: 0,
            volume: 0.
        }
    ));
    assert!(!controller.is_visible());
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.muted(), &[true, true, true]);
    for i in 0..3 {
        assert!(!controller.should_play(i));
        assert!(controller.should_be_muted(i));
    }

    let directives = controller.handle(CarouselEvent::IntersectionChange { ratio: 0.9 });
    assert!(contains(
        &directives,
        &Directive::SetPlaying {
            index: 0,
            playing: true
        }
    ));
    assert!(controller.should_play(0));
    assert!(controller.should_be_muted(0));
}

#[test]
fn test_toggle_mute_while_hidden_is_ignored() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);
    controller.handle(CarouselEvent::IntersectionChange { ratio: 0. });
    assert!(controller.handle(CarouselEvent::ToggleMute).is_empty());
    assert_eq!(controller.muted(), &[true, true, true]);
    assert!(!controller.is_volume_indicator_visible());

    let directives = controller.handle(CarouselEvent::IntersectionChange { ratio: 1. });
    assert_eq!(
        directives,
        vec![
            Directive::SetVolume {
                index: 0,
                volume: 0.
            },
            Directive::SetPlaying {
                index: 0,
                playing: true
            },
        ]
    );
    assert!(controller.should_be_muted(0));

    // Visible again: toggling works as usual
    controller.handle(CarouselEvent::ToggleMute);
    assert_eq!(controller.muted(), &[false, true, true]);
}

#[test]
fn test_no_resume_when_disabled() {
    let config = CarouselConfiguration {
        resume_on_visible: false,
        ..CarouselConfiguration::default()
    };
    let mut controller = CarouselController::new(config);
    controller.handle(CarouselEvent::SelectCollection(collection("works", 3)));
    controller.handle(CarouselEvent::IntersectionChange { ratio: 0. });
    assert!(controller
        .handle(CarouselEvent::IntersectionChange { ratio: 1. })
        .is_empty());
    assert!(controller.is_visible());
    assert!(!controller.should_play(0));

    // Choosing another item plays it again
    controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(controller.should_play(1));
}

#[test]
fn test_navigation_while_hidden_does_not_play() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::IntersectionChange { ratio: 0. });
    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(!contains(
        &directives,
        &Directive::SetPlaying {
            index: 1,
            playing: true
        }
    ));
    assert!(playing_indexes(&controller).is_empty());
}

#[test]
fn test_at_most_one_item_plays() {
    let mut controller = controller_with(4);
    for i in 0..4 {
        ready(&mut controller, i);
    }
    assert_eq!(playing_indexes(&controller), vec![0]);
    controller.handle(CarouselEvent::GoTo(2));
    assert_eq!(playing_indexes(&controller), vec![2]);
    controller.handle(CarouselEvent::Navigate(Direction::Previous));
    assert_eq!(playing_indexes(&controller), vec![1]);
}

#[test]
fn test_fullscreen_on_non_active_item() {
    let mut controller = controller_with(3);
    assert!(controller
        .handle(CarouselEvent::RequestFullscreen { index: 1 })
        .is_empty());
    assert!(!controller.is_fullscreen());
}

#[test]
fn test_fullscreen_lifecycle() {
    let mut controller = controller_with(3);
    assert_eq!(
        controller.handle(CarouselEvent::RequestFullscreen { index: 0 }),
        vec![Directive::RequestFullscreen { index: 0 }]
    );
    assert!(!controller.is_fullscreen());
    controller.handle(CarouselEvent::FullscreenChange {
        is_fullscreen: true,
    });
    assert!(controller.is_fullscreen());

    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(contains(&directives, &Directive::ExitFullscreen));
    assert!(!controller.is_fullscreen());
    assert!(controller
        .handle(CarouselEvent::ExitFullscreen)
        .is_empty());
}

#[test]
fn test_fullscreen_failure() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::RequestFullscreen { index: 0 });
    assert!(controller
        .handle(CarouselEvent::FullscreenFailed {
            message: "Permission denied".to_string()
        })
        .is_empty());
    assert!(!controller.is_fullscreen());

    // Everything else keeps working
    controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert_eq!(controller.current_index(), 1);
    assert_eq!(
        controller.handle(CarouselEvent::RequestFullscreen { index: 1 }),
        vec![Directive::RequestFullscreen { index: 1 }]
    );
}

#[test]
fn test_external_fullscreen_exit() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::RequestFullscreen { index: 0 });
    controller.handle(CarouselEvent::FullscreenChange {
        is_fullscreen: true,
    });
    controller.handle(CarouselEvent::FullscreenChange {
        is_fullscreen: false,
    });
    assert!(!controller.is_fullscreen());
    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(!contains(&directives, &Directive::ExitFullscreen));
}

#[test]
fn test_late_fullscreen_confirmation_after_navigation() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::RequestFullscreen { index: 0 });
    let directives = controller.handle(CarouselEvent::Navigate(Direction::Next));
    assert!(contains(&directives, &Directive::ExitFullscreen));
    controller.handle(CarouselEvent::FullscreenChange {
        is_fullscreen: true,
    });
    assert!(!controller.is_fullscreen());
    controller.handle(CarouselEvent::FullscreenChange {
        is_fullscreen: false,
    });
    assert_eq!(
        controller.handle(CarouselEvent::RequestFullscreen { index: 1 }),
        vec![Directive::RequestFullscreen { index: 1 }]
    );
}

#[test]
fn test_collection_change_exits_fullscreen() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::RequestFullscreen { index: 0 });
    controller.handle(CarouselEvent::FullscreenChange {
        is_fullscreen: true,
    });
    let directives = controller.handle(CarouselEvent::SelectCollection(collection("orbit", 2)));
    assert_eq!(directives[0], Directive::ExitFullscreen);
    assert!(!controller.is_fullscreen());
}

#[test]
fn test_tap_toggles_mute() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);
    controller.handle(CarouselEvent::PointerDown {
        x: 100.,
        y: 100.,
        time: 0.,
    });
    controller.handle(CarouselEvent::PointerMove { x: 102., y: 101. });
    let directives = controller.handle(CarouselEvent::PointerUp {
        x: 103.,
        y: 102.,
        time: 120.,
    });
    assert!(contains(&directives, &Directive::ShowVolumeIndicator { muted: false }));
    assert_eq!(controller.muted(), &[false, true, true]);
}

#[test]
fn test_swipes_navigate() {
    let mut controller = controller_with(3);
    controller.handle(CarouselEvent::PointerDown {
        x: 300.,
        y: 100.,
        time: 0.,
    });
    controller.handle(CarouselEvent::PointerUp {
        x: 200.,
        y: 110.,
        time: 250.,
    });
    assert_eq!(controller.current_index(), 1);

    controller.handle(CarouselEvent::PointerDown {
        x: 200.,
        y: 100.,
        time: 1000.,
    });
    controller.handle(CarouselEvent::PointerUp {
        x: 290.,
        y: 100.,
        time: 1200.,
    });
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn test_ambiguous_and_cancelled_gestures() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);

    // Mostly vertical: a scroll attempt
    controller.handle(CarouselEvent::PointerDown {
        x: 100.,
        y: 100.,
        time: 0.,
    });
    assert!(controller
        .handle(CarouselEvent::PointerUp {
            x: 160.,
            y: 300.,
            time: 200.,
        })
        .is_empty());

    controller.handle(CarouselEvent::PointerDown {
        x: 100.,
        y: 100.,
        time: 500.,
    });
    controller.handle(CarouselEvent::PointerCancel);
    assert!(controller
        .handle(CarouselEvent::PointerUp {
            x: 100.,
            y: 100.,
            time: 550.,
        })
        .is_empty());
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.muted(), &[true, true, true]);
}

#[test]
fn test_empty_collection() {
    let mut controller = controller_with(0);
    assert_eq!(controller.active_index(), None);
    assert!(controller.transforms().is_empty());
    assert!(!controller.can_go_previous());
    assert!(!controller.can_go_next());
    assert!(controller
        .handle(CarouselEvent::Navigate(Direction::Next))
        .is_empty());
    assert!(controller.handle(CarouselEvent::ToggleMute).is_empty());
    assert!(controller
        .handle(CarouselEvent::RequestFullscreen { index: 0 })
        .is_empty());
    assert!(controller
        .handle(CarouselEvent::ViewportResize { width: 500. })
        .is_empty());
}

#[test]
fn test_viewport_resize() {
    let mut controller = controller_with(3);
    let directives = controller.handle(CarouselEvent::ViewportResize { width: 700. });
    match &directives[..] {
        [Directive::UpdateTransforms(transforms)] => {
            assert_eq!(transforms.len(), 3);
            assert_eq!(transforms[1].translate_x, 0.40 * 700.);
        }
        _ => panic!("Unexpected directives: {directives:?}"),
    }
    assert!(controller
        .handle(CarouselEvent::ViewportResize { width: 700. })
        .is_empty());
    assert!(controller
        .handle(CarouselEvent::ViewportResize { width: f64::NAN })
        .is_empty());
}

#[test]
fn test_layout_configuration_update() {
    let mut controller = controller_with(3);
    let unchanged = controller.configuration().clone();
    assert!(controller.set_configuration(unchanged).is_empty());
    let config = CarouselConfiguration {
        scale_step: 0.1,
        ..controller.configuration().clone()
    };
    let directives = controller.set_configuration(config);
    assert!(matches!(&directives[..], [Directive::UpdateTransforms(_)]));
}

#[test]
fn test_unmount() {
    let mut controller = controller_with(3);
    ready(&mut controller, 0);
    let generation = controller.generation();
    controller.handle(CarouselEvent::ToggleMute);
    let directives = controller.handle(CarouselEvent::Unmount);
    assert!(contains(&directives, &Directive::HideVolumeIndicator));
    assert!(contains(
        &directives,
        &Directive::SetPlaying {
            index: 0,
            playing: false
        }
    ));
    assert_eq!(controller.active_index(), None);
    assert!(controller
        .handle(CarouselEvent::ItemReady {
            generation,
            index: 1
        })
        .is_empty());

    // Selecting after an unmount is a first selection again
    let directives = controller.handle(CarouselEvent::SelectCollection(collection("works", 3)));
    assert!(!contains(&directives, &Directive::ScrollIntoView));
}
