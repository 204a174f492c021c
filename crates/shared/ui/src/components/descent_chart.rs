//! The animated gradient-descent figure.
//!
//! A background animator reveals the optimizer's path one step at a time,
//! holds with the full trajectory visible, signals the reset, then clears
//! and loops. Leaving the page drops the animator, which stops its task.

use crate::locale::use_locale;
use dioxus::prelude::*;
use folio_motion::descent::{CENTER, CONTOUR_RADII, DESCENT_PATH};
use folio_motion::{StepAnimator, StepSequencer};
use std::rc::Rc;

/// Counter readout; a dash while nothing is revealed yet.
fn counter_text(label: &str, visible: usize, total: usize) -> String {
    if visible == 0 {
        "—".to_owned()
    } else {
        format!("{label} {visible}/{total}")
    }
}

#[component]
pub fn DescentChart() -> Element {
    let locale = use_locale();
    let animator =
        use_hook(|| Rc::new(StepAnimator::spawn(StepSequencer::new(DESCENT_PATH.len()))));
    let mut frame = use_signal(|| animator.current());

    // Forward published frames into the signal; cancelled on unmount.
    use_future({
        let animator = Rc::clone(&animator);
        move || {
            let animator = Rc::clone(&animator);
            async move {
                let mut rx = animator.frames();
                while rx.changed().await.is_ok() {
                    frame.set(*rx.borrow_and_update());
                }
            }
        }
    });

    let current = frame();
    let revealed = &DESCENT_PATH[..current.visible];
    let trail = revealed
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let head = current.head.map(|index| DESCENT_PATH[index]);
    let step_label = locale.bundle().writing.step;

    rsx! {
        figure { class: "descent-chart",
            svg { view_box: "0 0 100 100", preserve_aspect_ratio: "xMidYMid meet",
                // Loss contours, outermost first; wider than tall, like a
                // stretched valley.
                for (rx, ry) in CONTOUR_RADII.map(|radius| (radius * 1.3, radius)) {
                    ellipse {
                        key: "{ry}",
                        cx: "{CENTER.x}",
                        cy: "{CENTER.y}",
                        rx: "{rx}",
                        ry: "{ry}",
                        class: "contour",
                    }
                }
                circle {
                    cx: "{CENTER.x}",
                    cy: "{CENTER.y}",
                    r: "1.5",
                    class: "minimum",
                }
                if revealed.len() > 1 {
                    polyline { points: "{trail}", class: "trail" }
                }
                for point in revealed {
                    circle {
                        key: "{point.x}-{point.y}",
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "1.2",
                        class: "step-dot",
                    }
                }
                if let Some(point) = head {
                    circle {
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "2.5",
                        class: "head",
                    }
                }
            }
            figcaption { class: "descent-counter",
                {counter_text(step_label, current.visible, DESCENT_PATH.len())}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::counter_text;

    #[test]
    fn counter_shows_progress() {
        assert_eq!(counter_text("Step", 3, 7), "Step 3/7");
        assert_eq!(counter_text("Schritt", 7, 7), "Schritt 7/7");
    }

    #[test]
    fn counter_is_a_dash_before_the_first_step() {
        assert_eq!(counter_text("Step", 0, 7), "—");
    }
}
