use {
    anyhow::Context,
    clap::Parser,
    imuview::*,
    log::LevelFilter,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match &args.log_dir {
        Some(dir) => base::init_file_logger(dir, LevelFilter::Info)
            .with_context(|| format!("cannot log to {}", dir.display()))?,
        None => base::init_stdout_logger(LevelFilter::Info),
    }

    if args.list_ports {
        for port in imu::list_ports()? {
            println!("{port}");
        }
        return Ok(());
    }

    let video = video::open(&args.video)
        .with_context(|| format!("cannot open video {}", args.video.display()))?;
    let config = args.scheduler_config();
    let mut scheduler = Scheduler::new(&config, video, args.telemetry_config());
    let mut host = WindowHost::new("imu-view", config.display_size)?;

    if args.port.is_some() {
        scheduler.connect(&mut host);
    }

    log::info!("imu-view running");
    run(&mut scheduler, &mut host, &config).await;
    log::info!("imu-view stopped");
    Ok(())
}
