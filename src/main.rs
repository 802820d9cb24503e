use std::sync::Arc;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use rust_siswa_portal::client::{CourseScope, HttpBackend};
use rust_siswa_portal::config::AppConfig;
use rust_siswa_portal::services::CourseService;

/// 诊断用 CLI：初始化配置与日志后拉一次课程列表并打印。
/// 用法：siswa-portal <siswa_id>
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let siswa_id: i64 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| {
            eprintln!("Usage: siswa-portal <siswa_id>");
            std::process::exit(2);
        })
        .parse()?;

    let backend = Arc::new(HttpBackend::from_config(&config.api)?);
    let courses = CourseService::new(backend);

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    warn!("Fetching course list from {}", config.api.base_url);

    let views = courses.list_courses(CourseScope::Siswa(siswa_id)).await?;
    println!("{}", serde_json::to_string_pretty(&views)?);

    Ok(())
}
