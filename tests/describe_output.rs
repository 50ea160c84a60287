//! Integration tests for delivering descriptions through the output sinks.

use jiff::civil::date;
use testresult::TestResult;

use motel::{
    customers::CustomerRecord,
    output::{ConsoleSink, DescriptionSink, NoticeSink},
};

#[test]
fn console_and_notice_carry_the_same_description() -> TestResult {
    let description = CustomerRecord::sample().describe(date(2024, 7, 20));

    let mut console = ConsoleSink::new(Vec::new());
    let mut notice = NoticeSink::new(Vec::new());

    console.deliver(&description)?;
    notice.deliver(&description)?;

    let console = String::from_utf8(console.into_inner())?;
    let notice = String::from_utf8(notice.into_inner())?;

    assert_eq!(console, format!("{description}\n"));

    for line in description.lines() {
        assert!(notice.contains(line), "notice missing {line:?}:\n{notice}");
    }

    Ok(())
}

#[test]
fn age_changes_on_the_birthday() -> TestResult {
    let customer = CustomerRecord::sample();

    assert_eq!(customer.age(date(2025, 5, 5))?, 63);
    assert_eq!(customer.age(date(2025, 5, 6))?, 64);

    Ok(())
}

#[test]
fn age_today_agrees_with_explicit_today() -> TestResult {
    let customer = CustomerRecord::sample();

    let before = jiff::Zoned::now().date();
    let age = customer.age_today()?;
    let after = jiff::Zoned::now().date();

    assert!(
        age == customer.age(before)? || age == customer.age(after)?,
        "age {age} matches neither {before} nor {after}"
    );

    Ok(())
}
