use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::{either::Either, html, prelude::*};
use leptos_use::{
    use_document, use_element_bounding, use_raf_fn, use_window_scroll, use_window_size,
    utils::Pausable, UseElementBoundingReturn, UseRafFnCallbackArgs, UseWindowSizeReturn,
};

use crate::silhouette::{parallax_offsets, FloatFrame, ShapeKind, ShapePreset, Variant};

/// Fixed irregular blob outline, drawn in the same 640x640 space as the
/// circle shapes.
const BLOB_PATH: &str = "M480 140c60 42 104 120 99 189-5 69-57 129-120 164-64 35-140 45-206 23-66-22-122-76-146-144-24-67-16-148 30-203 47-55 130-84 206-82 76 2 136 30 137 53z";

/// Full-width divider wave, drawn in a 1440x120 space.
const WAVE_PATH: &str =
    "M0 40 C240 120, 480 0, 720 60 C960 120, 1200 40, 1440 80 L1440 120 L0 120 Z";

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

// Gradient defs are global to the page, so ids carry the variant, the shape
// slot and a per-mount counter. Two sections mounting the same variant must
// not share a def.
fn gradient_id(instance: usize, variant: Variant, slot: &str) -> String {
    format!("bg-grad-{}-{}-{}", variant.as_str(), slot, instance)
}

/// Scroll fraction of the whole page: 0 at the top, 1 with the page scrolled
/// to the bottom. Yields 0 on the server.
pub fn use_page_scroll_progress() -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    Signal::derive(move || {
        let track = use_document()
            .as_ref()
            .and_then(|d| d.document_element())
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default()
            - height.get();
        if track.is_finite() && track > 0.0 {
            (scroll_y.get() / track).clamp(0.0, 1.0)
        } else {
            0.0
        }
    })
}

/// Progress of a referenced region through the top of the viewport: 0 while
/// the region's top is at or below the viewport top, 1 once its bottom has
/// scrolled past it.
pub fn use_region_scroll_progress(target: NodeRef<html::Section>) -> Signal<f64> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    Signal::derive(move || {
        let h = height.get();
        if h > 0.0 {
            (-top.get() / h).clamp(0.0, 1.0)
        } else {
            0.0
        }
    })
}

/// Decorative backdrop for a page section: two parallax gradient shapes,
/// up to three floating themed icons, and an optional wave divider.
///
/// `progress` is normally left unset so the shapes follow the page scroll;
/// tests and special layouts can feed a synthetic fraction instead.
#[component]
pub fn SilhouetteShapes(
    #[prop(optional)] variant: Variant,
    #[prop(default = 1.0)] intensity: f64,
    #[prop(optional)] wave: Option<bool>,
    #[prop(optional)] progress: Option<Signal<f64>>,
) -> impl IntoView {
    let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
    let progress = progress.unwrap_or_else(use_page_scroll_progress);
    let cfg = variant.config();

    let offset_a = Signal::derive(move || parallax_offsets(progress.get(), intensity).0);
    let offset_b = Signal::derive(move || parallax_offsets(progress.get(), intensity).1);

    view! {
        <Shape
            preset={&cfg.shape_a}
            gradient={gradient_id(instance, variant, "a")}
            offset=offset_a
        />
        <Shape
            preset={&cfg.shape_b}
            gradient={gradient_id(instance, variant, "b")}
            offset=offset_b
        />
        {variant
            .float_icons()
            .iter()
            .map(|icon| {
                view! {
                    <FloatIcon pos=icon.pos delay=icon.delay dist=icon.dist dur=icon.dur>
                        <i class=icon.icon></i>
                    </FloatIcon>
                }
            })
            .collect_view()}
        {cfg
            .show_wave(wave)
            .then(|| view! { <WaveDivider opacity=cfg.wave_opacity /> })}
    }
}

#[component]
fn Shape(preset: &'static ShapePreset, gradient: String, offset: Signal<f64>) -> impl IntoView {
    let fill = format!("url(#{gradient})");
    view! {
        <div
            aria-hidden="true"
            class=format!("pointer-events-none absolute {} -z-10 {}", preset.pos, preset.opacity)
            style:transform=move || format!("translateY({}px)", offset.get())
        >
            <svg width=preset.size.to_string() height=preset.size.to_string() viewBox="0 0 640 640">
                <defs>
                    <radialGradient id=gradient cx="50%" cy="50%" r="50%">
                        <stop
                            offset="0%"
                            style=format!("stop-color:{};stop-opacity:1", preset.color_inner)
                        />
                        <stop
                            offset="100%"
                            style=format!("stop-color:{};stop-opacity:1", preset.color_outer)
                        />
                    </radialGradient>
                </defs>
                {match preset.shape {
                    ShapeKind::Blob => {
                        Either::Left(view! { <path d=BLOB_PATH fill=fill fill-opacity="0.85"></path> })
                    }
                    ShapeKind::Circle => {
                        Either::Right(view! { <circle cx="320" cy="320" r="320" fill=fill></circle> })
                    }
                }}
            </svg>
        </div>
    }
}

/// Floats its children through a slow vertical bob with a slight tilt and
/// opacity pulse. The frame loop is scoped to the component and paused on
/// cleanup, so repeated mount/unmount cycles leave no callback behind.
#[component]
fn FloatIcon(
    pos: &'static str,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = 12.0)] dist: f64,
    #[prop(default = 5.0)] dur: f64,
    children: Children,
) -> impl IntoView {
    let elapsed = StoredValue::new(0.0_f64);
    let (frame, set_frame) = signal(FloatFrame::REST);

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let t = elapsed.with_value(|t| *t) + args.delta / 1000.0;
        elapsed.set_value(t);
        set_frame(FloatFrame::at(t - delay, dur, dist));
    });
    on_cleanup(move || pause());

    view! {
        <div
            class=format!("absolute {pos}")
            style:transform=move || {
                let f = frame();
                format!("translateY({}px) rotate({}deg)", f.y, f.rotate)
            }
            style:opacity=move || frame().opacity.to_string()
        >
            {children()}
        </div>
    }
}

#[component]
fn WaveDivider(opacity: f64) -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none absolute inset-x-0 -bottom-px -z-10">
            <svg viewBox="0 0 1440 120" class="w-full">
                <path d=WAVE_PATH fill=format!("rgba(255,255,255,{opacity})")></path>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_ids_embed_variant_and_slot() {
        let id = gradient_id(0, Variant::Gamer, "a");
        assert!(id.contains("gamer"));
        assert!(id.ends_with("-a-0"));
    }

    #[test]
    fn gradient_ids_differ_between_slots() {
        assert_ne!(
            gradient_id(3, Variant::Webdev, "a"),
            gradient_id(3, Variant::Webdev, "b")
        );
    }

    #[test]
    fn same_variant_instances_do_not_collide() {
        let first = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        let second = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        assert_ne!(
            gradient_id(first, Variant::Webdev, "a"),
            gradient_id(second, Variant::Webdev, "a")
        );
    }
}
