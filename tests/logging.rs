use complexkit::init_logging;

#[test]
fn test_init_logging_only_once() {
    assert!(init_logging().is_ok());
    assert!(init_logging().is_err());
    tracing::info!("logging initialised for tests");
}
