use movienight_bot::commands::movies::intent::{page_count, page_offset};
use movienight_bot::commands::movies::ui::format_uptime;
use movienight_bot::database::models::Category;

#[test]
fn test_page_math() {
    assert_eq!(page_offset(1), 0);
    assert_eq!(page_offset(2), 20);
    assert_eq!(page_offset(5), 80);

    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(20), 1);
    assert_eq!(page_count(21), 2);
    assert_eq!(page_count(25), 2);
}

#[test]
fn test_category_expansion() {
    assert_eq!(Category::A.expand(), &[Category::A]);
    assert_eq!(Category::B.expand(), &[Category::B]);
    assert_eq!(Category::Both.expand(), &[Category::A, Category::B]);
}

#[test]
fn test_category_display() {
    assert_eq!(Category::A.as_str(), "A");
    assert_eq!(Category::B.as_str(), "B");
    assert_eq!(Category::Both.as_str(), "AB");
    assert_eq!(Category::Both.to_string(), "AB");
}

#[test]
fn test_uptime_formatting() {
    assert_eq!(format_uptime(5), "5s");
    assert_eq!(format_uptime(65), "1m 05s");
    assert_eq!(format_uptime(3_661), "1h 01m 01s");
    assert_eq!(format_uptime(90_061), "1d 01h 01m 01s");
}
