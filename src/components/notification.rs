//! Toast notification mount point and dismissal timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Notices are raised by preference actions (reset) through the shared
//! `PreferenceManager`. Dismissal timers are fire-and-forget; a notice that
//! was replaced in the meantime ignores its stale timers.

use leptos::prelude::*;

use crate::app::Preferences;
use crate::state::notification::{NoticeId, NoticePhase};

/// Schedule the exit animation and removal of notice `id`.
fn schedule_dismissal(prefs: RwSignal<Preferences>, id: NoticeId) {
    #[cfg(feature = "csr")]
    {
        let timings = expect_context::<crate::config::PageConfig>().notifications;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(timings.display_ms)).await;
            let leaving = prefs.try_update(|p| p.notifications_mut().begin_exit(id)).unwrap_or(false);
            if !leaving {
                return;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(timings.exit_ms)).await;
            prefs.update(|p| {
                p.notifications_mut().dismiss(id);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (prefs, id);
    }
}

/// Run a preference action that raises a notice and schedule its dismissal.
pub fn notify_after(prefs: RwSignal<Preferences>, action: impl FnOnce(&mut Preferences) -> NoticeId) {
    if let Some(id) = prefs.try_update(action) {
        schedule_dismissal(prefs, id);
    }
}

/// Fixed-position toast showing the current notice, if any.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let prefs = expect_context::<RwSignal<Preferences>>();

    let notice = move || prefs.with(|p| p.notifications().current().cloned());

    view! {
        <div class="notification-mount" aria-live="polite">
            {move || {
                notice()
                    .map(|n| {
                        let class = match n.phase {
                            NoticePhase::Visible => "notification notification--visible",
                            NoticePhase::Leaving => "notification notification--leaving",
                        };
                        view! {
                            <div class=class role="status">
                                {n.message}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
