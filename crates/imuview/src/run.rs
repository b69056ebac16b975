use {
    crate::*,
    std::time::Duration,
    tokio::time::{MissedTickBehavior, interval},
};

// tokio refuses a zero period
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Drive both cadences until the host goes away or asks to quit.
///
/// User actions and link status are checked on the orientation cadence.
/// Telemetry is closed before returning.
pub async fn run<H: Host>(scheduler: &mut Scheduler, host: &mut H, config: &SchedulerConfig) {
    let mut orientation_timer = interval(config.orientation_interval.max(MIN_PERIOD));
    orientation_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut video_timer = interval(config.video_interval.max(MIN_PERIOD));
    video_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    'ticks: while host.is_alive() {
        tokio::select! {
            _ = orientation_timer.tick() => {
                for action in host.poll_actions() {
                    if scheduler.handle_action(action, host).is_break() {
                        log::info!("quit requested");
                        break 'ticks;
                    }
                }
                if !host.is_alive() {
                    break 'ticks;
                }
                scheduler.check_link(host);
                scheduler.orientation_tick(host);
            }
            _ = video_timer.tick() => {
                scheduler.video_tick(host);
            }
        }
    }

    scheduler.shutdown().await;
}
