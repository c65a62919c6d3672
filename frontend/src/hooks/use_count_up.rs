use gloo::timers::future::TimeoutFuture;
use shared::animation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Frame interval for the sampling loop, roughly 60fps.
const FRAME_MS: u32 = 16;

/// Animates a display value from 0 toward `target` over `duration_ms` using the
/// ease-out curve in `shared::animation`.
///
/// A changed target restarts the animation from 0 (this matches the shipped
/// behavior; it does not continue from the value currently on screen). The
/// running loop is cancelled by bumping a generation counter, both when a new
/// animation starts and when the owning component unmounts.
#[hook]
pub fn use_count_up(target: f64, duration_ms: f64) -> f64 {
    let value = use_state(|| 0.0f64);
    let generation = use_mut_ref(|| 0u64);

    {
        let value = value.clone();
        let generation = generation.clone();

        use_effect_with((target, duration_ms), move |&(target, duration_ms)| {
            *generation.borrow_mut() += 1;
            let my_generation = *generation.borrow();

            value.set(0.0);

            let loop_value = value;
            let loop_generation = generation.clone();
            spawn_local(async move {
                let start = js_sys::Date::now();
                loop {
                    TimeoutFuture::new(FRAME_MS).await;
                    if *loop_generation.borrow() != my_generation {
                        break;
                    }
                    let elapsed = js_sys::Date::now() - start;
                    loop_value.set(animation::sample(target, elapsed, duration_ms));
                    if elapsed >= duration_ms {
                        break;
                    }
                }
            });

            move || {
                *generation.borrow_mut() += 1;
            }
        });
    }

    *value
}

/// `use_count_up` with the standard 1200 ms duration.
#[hook]
pub fn use_count_up_default(target: f64) -> f64 {
    use_count_up(target, animation::DEFAULT_DURATION_MS)
}
