use dioxus::prelude::*;
use tracing::{debug, warn};

// reports vertical scroll progress of the whole document, normalized to [0,1]
const SCROLL_LISTENER: &str = r#"
const report = () => {
    const root = document.documentElement;
    const range = root.scrollHeight - root.clientHeight;
    dioxus.send(range > 0 ? root.scrollTop / range : 0);
};
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report);
report();
"#;

pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

pub fn use_scroll_progress() -> Signal<f64> {
    let mut progress = use_signal(|| 0.0);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);
        debug!("scroll listener installed");

        loop {
            match listener.recv::<f64>().await {
                Ok(sample) => progress.set(clamp_progress(sample)),
                Err(err) => {
                    warn!("scroll sampling stopped: {err}");
                    break;
                }
            }
        }
    });

    progress
}
