use folio_logger::Logger;

#[test]
fn second_init_fails_cleanly() {
    let _logger = Logger::builder().name("integration-twice").init().expect("first init");

    let second = Logger::builder().name("integration-twice").init();
    assert!(second.is_err(), "a second global subscriber must be rejected");
}
