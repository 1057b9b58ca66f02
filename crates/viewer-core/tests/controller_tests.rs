// Host-side tests for mode arbitration and the single drag session.

mod common;

use common::{Push, RecordingSink};
use rand::prelude::*;
use std::f32::consts::FRAC_PI_2;
use viewer_core::{
    decide, Decision, DragSession, HitTarget, InputController, InputEvent, Modifiers,
    PointerSample, ViewerConfig, WidgetDecl, WidgetId, WidgetRegistry,
};

fn make_controller() -> InputController {
    let (reg, _) = WidgetRegistry::build(vec![
        WidgetDecl::new("bar-skin", (24.0, 140.0), "logo-skin").with_initial_position(24.0),
        WidgetDecl::new("bar-bone", (24.0, 140.0), "logo-bone"),
    ]);
    let mut config = ViewerConfig::default();
    config.orbit.rotate_speed = 0.01;
    InputController::new(&reg, config)
}

fn down(x: f32, y: f32, target: HitTarget) -> InputEvent {
    InputEvent::PointerDown {
        sample: PointerSample::new(x, y),
        target,
        modifiers: Modifiers::NONE,
    }
}

fn down_on(widget: &str, x: f32) -> InputEvent {
    down(x, 300.0, HitTarget::Widget(WidgetId::from(widget)))
}

fn move_to(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        sample: PointerSample::new(x, y),
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn arbiter_priority_order() {
    let registered = |id: &WidgetId| id.as_str() == "bar";
    let bar = HitTarget::Widget(WidgetId::from("bar"));
    let open = DragSession::ObjectDrag(viewer_core::ObjectDrag {
        last_sample: PointerSample::default(),
    });

    assert_eq!(
        decide(&bar, &DragSession::None, registered),
        Decision::StartSlider(WidgetId::from("bar"))
    );
    assert_eq!(
        decide(&bar, &open, registered),
        Decision::StartSlider(WidgetId::from("bar"))
    );
    assert_eq!(
        decide(&HitTarget::Viewport, &DragSession::None, registered),
        Decision::StartObjectDrag
    );
    assert_eq!(decide(&HitTarget::Viewport, &open, registered), Decision::Ignore);
    // an unregistered widget is not a slider hit region
    let stray = HitTarget::Widget(WidgetId::from("other"));
    assert_eq!(
        decide(&stray, &DragSession::None, registered),
        Decision::StartObjectDrag
    );
}

#[test]
fn slider_scenario_through_controller() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();

    assert!(ctl.handle(down_on("bar-skin", 24.0), &mut sink).consumed);
    assert!(ctl.session().is_slider());
    let skin = WidgetId::from("bar-skin");
    assert_eq!(ctl.sliders().widget(&skin).unwrap().current_position, 24.0);
    assert_eq!(ctl.sliders().target(&skin).unwrap().opacity, 0.2);

    ctl.handle(move_to(82.0, 310.0), &mut sink);
    assert!((sink.last_opacity("logo-skin").unwrap() - 0.6).abs() < 1e-6);

    ctl.handle(move_to(200.0, 310.0), &mut sink);
    assert_eq!(sink.last_position("bar-skin"), Some(140.0));
    assert_eq!(sink.last_opacity("logo-skin"), Some(1.0));

    ctl.handle(InputEvent::PointerUp, &mut sink);
    assert_eq!(*ctl.session(), DragSession::None);
    assert_eq!(ctl.sliders().widget(&skin).unwrap().current_position, 140.0);
    assert_eq!(sink.active_flags("bar-skin"), vec![true, false]);
    // slider drags never touch the object
    assert_eq!(ctl.transform().rotation_y, 0.0);
}

#[test]
fn object_scenario_through_controller() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(down(100.0, 100.0, HitTarget::Viewport), &mut sink);
    assert!(ctl.session().is_object());
    ctl.handle(move_to(150.0, 100.0), &mut sink);
    assert!((ctl.transform().rotation_y - 0.5).abs() < 1e-6);
    // slider state untouched
    assert_eq!(sink.last_opacity("logo-skin"), None);
}

#[test]
fn slider_press_during_object_drag_hands_over() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(down(100.0, 100.0, HitTarget::Viewport), &mut sink);
    ctl.handle(move_to(110.0, 100.0), &mut sink);
    let before = *ctl.transform();

    ctl.handle(down_on("bar-bone", 60.0), &mut sink);
    assert!(ctl.session().is_slider());

    ctl.handle(move_to(300.0, 400.0), &mut sink);
    assert_eq!(*ctl.transform(), before);
    assert_eq!(sink.last_position("bar-bone"), Some(140.0));
}

#[test]
fn second_slider_press_closes_the_first() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(down_on("bar-skin", 24.0), &mut sink);
    ctl.handle(down_on("bar-bone", 24.0), &mut sink);
    assert_eq!(sink.active_flags("bar-skin"), vec![true, false]);
    assert_eq!(sink.active_flags("bar-bone"), vec![true]);
    ctl.handle(move_to(53.0, 0.0), &mut sink);
    assert_eq!(sink.last_position("bar-bone"), Some(53.0));
    assert_eq!(sink.last_position("bar-skin"), None);
}

#[test]
fn stray_press_during_object_drag_is_ignored() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(down(0.0, 0.0, HitTarget::Viewport), &mut sink);
    ctl.handle(move_to(10.0, 0.0), &mut sink);
    let outcome = ctl.handle(down(500.0, 500.0, HitTarget::Viewport), &mut sink);
    assert!(!outcome.consumed);
    // anchor not reset by the stray press
    ctl.handle(move_to(20.0, 0.0), &mut sink);
    assert!((ctl.transform().rotation_y - 0.2).abs() < 1e-6);
}

#[test]
fn pointer_up_without_session_is_a_no_op() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    let outcome = ctl.handle(InputEvent::PointerUp, &mut sink);
    assert!(!outcome.consumed);
    assert!(sink.pushes.is_empty());
    ctl.handle(down_on("bar-skin", 24.0), &mut sink);
    ctl.handle(InputEvent::PointerUp, &mut sink);
    ctl.handle(InputEvent::PointerUp, &mut sink);
    assert_eq!(sink.active_flags("bar-skin"), vec![true, false]);
}

#[test]
fn moves_without_session_do_nothing() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    let outcome = ctl.handle(move_to(80.0, 80.0), &mut sink);
    assert!(!outcome.consumed);
    assert!(sink.pushes.is_empty());
    assert_eq!(ctl.transform().rotation_y, 0.0);
}

#[test]
fn cancel_closes_like_pointer_up() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(down_on("bar-skin", 24.0), &mut sink);
    ctl.handle(InputEvent::Cancel, &mut sink);
    assert_eq!(*ctl.session(), DragSession::None);
    assert_eq!(sink.active_flags("bar-skin"), vec![true, false]);

    ctl.handle(down(0.0, 0.0, HitTarget::Viewport), &mut sink);
    ctl.handle(InputEvent::Cancel, &mut sink);
    ctl.handle(move_to(100.0, 0.0), &mut sink);
    assert_eq!(ctl.transform().rotation_y, 0.0);
}

#[test]
fn wheel_zooms_during_any_session() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(InputEvent::Wheel { delta_y: 100.0 }, &mut sink);
    ctl.handle(down_on("bar-skin", 24.0), &mut sink);
    ctl.handle(InputEvent::Wheel { delta_y: 100.0 }, &mut sink);
    assert!(ctl.session().is_slider());
    assert!((ctl.transform().position.z + 0.2).abs() < 1e-6);
}

#[test]
fn resize_is_forwarded() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.handle(
        InputEvent::Resize {
            width: 1280,
            height: 720,
        },
        &mut sink,
    );
    assert_eq!(sink.pushes, vec![Push::Resize(1280, 720)]);
}

#[test]
fn frame_applies_transform_only_when_changed() {
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.frame(&mut sink);
    ctl.frame(&mut sink);
    assert_eq!(sink.transforms(), 1);
    ctl.handle(InputEvent::Wheel { delta_y: -50.0 }, &mut sink);
    ctl.frame(&mut sink);
    ctl.frame(&mut sink);
    assert_eq!(sink.transforms(), 2);
    ctl.handle(InputEvent::Reset, &mut sink);
    ctl.frame(&mut sink);
    assert_eq!(sink.transforms(), 3);
    assert_eq!(sink.pushes.last(), Some(&Push::Transform(Default::default())));
}

#[test]
fn sync_pushes_every_widget() {
    let ctl = make_controller();
    let mut sink = RecordingSink::default();
    ctl.sync(&mut sink);
    assert_eq!(sink.last_opacity("logo-skin"), Some(0.2));
    assert_eq!(sink.last_opacity("logo-bone"), Some(1.0));
}

#[test]
fn random_traces_keep_one_session_and_bounded_pitch() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut ctl = make_controller();
    let mut sink = RecordingSink::default();
    for _ in 0..5_000 {
        let x = rng.gen_range(-200.0..600.0);
        let y = rng.gen_range(-200.0..600.0);
        let modifiers = Modifiers {
            shift: rng.gen_bool(0.2),
            ..Modifiers::NONE
        };
        let event = match rng.gen_range(0..10) {
            0 => down_on("bar-skin", x),
            1 => down_on("bar-bone", x),
            2 => down(x, y, HitTarget::Viewport),
            3 => InputEvent::PointerUp,
            4 => InputEvent::Wheel { delta_y: y },
            _ => InputEvent::PointerMove {
                sample: PointerSample::new(x, y),
                modifiers,
            },
        };
        let was_object = ctl.session().is_object();
        let before = *ctl.transform();
        let is_slider_press = matches!(
            &event,
            InputEvent::PointerDown {
                target: HitTarget::Widget(_),
                ..
            }
        );
        ctl.handle(event, &mut sink);

        if is_slider_press {
            assert!(ctl.session().is_slider());
            if was_object {
                assert_eq!(*ctl.transform(), before);
            }
        }
        let rx = ctl.transform().rotation_x;
        assert!(rx > -FRAC_PI_2 && rx < FRAC_PI_2);
        for w in ctl.sliders().widgets() {
            assert!(w.current_position >= w.domain_min && w.current_position <= w.domain_max);
        }
    }
}
