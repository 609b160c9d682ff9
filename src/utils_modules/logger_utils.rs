use crate::common::*;

#[doc = "Function to globally initialize the 'logger' variable"]
pub fn set_global_logger() {
    let file_spec: FileSpec = FileSpec::default().directory("logs").basename("analyzer");

    Logger::try_with_str("info")
        .expect("Failed to initialize logger")
        .log_to_file(file_spec)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .expect("Failed to start logger");
}

#[doc = "로그 라인 포맷: [시각] [레벨] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}
