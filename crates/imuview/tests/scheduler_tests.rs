mod common;

use {
    base::Vec2,
    common::*,
    image::{BLUE, GREEN, Image, RED},
    imu::{OrientationSample, TelemetryIn},
    imuview::{Scheduler, UserAction, VideoSink},
    std::{
        io::Cursor,
        ops::ControlFlow,
        sync::Arc,
        time::{Duration, Instant},
    },
};

fn playing(source: FakeSource) -> Scheduler {
    scheduler_with(source, &test_config().with_autoplay(true))
}

fn road_frame() -> Image {
    // sky above row 400, road below
    let mut image = Image::filled(Vec2::new(800, 600), RED);
    for y in 400..600 {
        for x in 0..800 {
            image.put(x, y, BLUE);
        }
    }
    image
}

#[test]
fn test_orientation_tick_without_sample_is_noop() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    assert!(!scheduler.orientation_tick(&mut host));
    assert!(host.models.is_empty());
    assert!(host.lines.is_empty());
}

#[test]
fn test_orientation_tick_consumes_sample_once() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    scheduler.state().publish(OrientationSample::new(1.0, 2.0, 3.0));

    assert!(scheduler.orientation_tick(&mut host));
    assert_eq!(host.models.len(), 1);
    assert_eq!(host.lines, vec!["Roll: 1.00, Pitch: 2.00, Yaw: 3.00".to_string()]);

    assert!(!scheduler.orientation_tick(&mut host));
    assert_eq!(host.models.len(), 1);
    assert_eq!(host.lines.len(), 1);
}

#[test]
fn test_orientation_tick_pushes_rotation() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    scheduler.state().publish(OrientationSample::new(0.0, 0.0, 90.0));
    scheduler.orientation_tick(&mut host);
    assert_eq!(host.models[0], imu::rotation_matrix(0.0, 0.0, 90.0));
}

#[test]
fn test_video_tick_waits_for_play() {
    let mut scheduler = scheduler_with(FakeSource::solid(&[RED]), &test_config());
    let mut host = RecordingHost::new();
    assert!(!scheduler.is_playing());
    assert!(!scheduler.video_tick(&mut host));
    assert!(host.frames.is_empty());
}

#[test]
fn test_video_tick_pushes_three_views() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    assert!(scheduler.video_tick(&mut host));
    let sinks: Vec<VideoSink> = host.frames.iter().map(|(sink, _)| *sink).collect();
    assert_eq!(
        sinks,
        vec![
            VideoSink::Annotated,
            VideoSink::ReferenceTopDown,
            VideoSink::AdjustedTopDown,
        ]
    );
    assert!(host.frames.iter().all(|(_, image)| image.size == SIZE));
}

#[test]
fn test_video_rewinds_when_exhausted() {
    let mut scheduler = playing(FakeSource::solid(&[RED, GREEN]));
    let mut host = RecordingHost::new();
    for _ in 0..3 {
        assert!(scheduler.video_tick(&mut host));
    }
    let shown: Vec<_> = host
        .frames_for(VideoSink::Annotated)
        .iter()
        .map(|image| image.pixel(2, 2))
        .collect();
    assert_eq!(shown, vec![RED, GREEN, RED]);
}

#[test]
fn test_video_frames_are_resized_for_display() {
    let mut scheduler = playing(FakeSource::new(vec![Image::filled(Vec2::new(160, 120), GREEN)]));
    let mut host = RecordingHost::new();
    scheduler.video_tick(&mut host);
    let annotated = host.frames_for(VideoSink::Annotated);
    assert_eq!(annotated[0].size, SIZE);
    assert_eq!(annotated[0].pixel(20, 15), GREEN);
}

#[test]
fn test_video_tick_uses_delta_without_new_sample() {
    let mut scheduler = playing(FakeSource::new(vec![road_frame()]));
    let mut host = RecordingHost::new();

    scheduler.video_tick(&mut host);
    assert_eq!(
        host.frames_for(VideoSink::ReferenceTopDown)[0],
        host.frames_for(VideoSink::AdjustedTopDown)[0]
    );

    scheduler.state().publish(OrientationSample::new(0.0, 200.0, 0.0));
    scheduler.orientation_tick(&mut host);
    // the sample is consumed; the next two video ticks must still see it
    for tick in 1..3 {
        scheduler.video_tick(&mut host);
        assert_ne!(
            host.frames_for(VideoSink::ReferenceTopDown)[tick],
            host.frames_for(VideoSink::AdjustedTopDown)[tick]
        );
    }
}

#[test]
fn test_video_error_stops_playback() {
    let mut scheduler = scheduler_with(BrokenSource, &test_config().with_autoplay(true));
    let mut host = RecordingHost::new();
    assert!(!scheduler.video_tick(&mut host));
    assert!(!scheduler.is_playing());
    assert!(host.lines[0].starts_with("Video error:"));
    assert!(!scheduler.video_tick(&mut host));
    assert_eq!(host.lines.len(), 1);
}

#[tokio::test]
async fn test_play_is_idempotent() {
    let mut scheduler = scheduler_with(FakeSource::solid(&[RED]), &test_config());
    let mut host = RecordingHost::new();
    for _ in 0..2 {
        let flow = scheduler.handle_action(UserAction::PlayVideo, &mut host);
        assert_eq!(flow, ControlFlow::Continue(()));
    }
    assert!(scheduler.is_playing());
    assert_eq!(host.lines, vec!["Video Started".to_string()]);
}

#[tokio::test]
async fn test_reset_zero_logs_and_rebases_delta() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    scheduler.state().publish(OrientationSample::new(10.0, -2.5, 45.0));
    scheduler.handle_action(UserAction::ResetZero, &mut host);
    assert!(host.logged("IMU Reset to Roll:10.00 Pitch:-2.50 Yaw:45.00"));
    assert_eq!(scheduler.state().delta(), OrientationSample::default());
    // the reset does not count as consuming the sample
    assert!(scheduler.orientation_tick(&mut host));
}

#[tokio::test]
async fn test_quit_breaks() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    let flow = scheduler.handle_action(UserAction::Quit, &mut host);
    assert_eq!(flow, ControlFlow::Break(()));
}

#[tokio::test]
async fn test_connect_failure_is_logged() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    scheduler.handle_action(UserAction::ToggleConnection, &mut host);
    assert!(!scheduler.is_connected());
    assert!(host.lines[0].starts_with("Failed to connect:"));
}

#[tokio::test]
async fn test_toggle_closes_open_link() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    let link = TelemetryIn::from_reader("silent", SilentPort, Arc::clone(scheduler.state()));
    scheduler.attach(link);
    assert!(scheduler.is_connected());

    scheduler.handle_action(UserAction::ToggleConnection, &mut host);
    assert!(!scheduler.is_connected());
    assert_eq!(host.lines, vec!["Port closed".to_string()]);
}

/// A port whose reads take a long time to time out.
struct SluggishPort;

impl std::io::Read for SluggishPort {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        std::thread::sleep(Duration::from_millis(300));
        Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "no data"))
    }
}

#[tokio::test]
async fn test_disconnect_does_not_wait_for_worker() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    let link = TelemetryIn::from_reader("sluggish", SluggishPort, Arc::clone(scheduler.state()));
    scheduler.attach(link);
    // let the worker enter its first read
    tokio::time::sleep(Duration::from_millis(20)).await;

    let start = Instant::now();
    scheduler.handle_action(UserAction::ToggleConnection, &mut host);
    assert!(start.elapsed() < Duration::from_millis(100), "{:?}", start.elapsed());
    assert!(!scheduler.is_connected());
    assert_eq!(host.lines, vec!["Port closed".to_string()]);

    // the video cadence keeps going while the worker winds down
    assert!(scheduler.video_tick(&mut host));
    assert_eq!(host.frames.len(), 3);
}

#[tokio::test]
async fn test_link_hangup_is_reported() {
    let mut scheduler = playing(FakeSource::solid(&[RED]));
    let mut host = RecordingHost::new();
    let link = TelemetryIn::from_reader(
        "cursor",
        Cursor::new(b"1*2*3\n".to_vec()),
        Arc::clone(scheduler.state()),
    );
    scheduler.attach(link);

    for _ in 0..200 {
        scheduler.check_link(&mut host);
        if !scheduler.is_connected() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(!scheduler.is_connected());
    assert!(host.logged("Serial error: connection closed"));
    // the sample read before the hangup is still there
    assert!(scheduler.orientation_tick(&mut host));
}
