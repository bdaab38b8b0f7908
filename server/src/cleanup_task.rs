use std::time::Duration;
use tokio::time::interval;

use common::log;

use crate::session_manager::SessionManager;

pub fn spawn_cleanup_task(
    session_manager: SessionManager,
    check_interval: Duration,
    inactivity_timeout: Duration,
) {
    tokio::spawn(async move {
        let mut ticker = interval(check_interval);
        // The first tick fires immediately; skip it so a fresh server does
        // not log a pointless cleanup pass.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = session_manager.cleanup_inactive(inactivity_timeout).await;
            if removed > 0 {
                log!("Cleaned up {} inactive sessions", removed);
            }
        }
    });
}
