use tapfind_common::{ContentType, Locator, Selector};
use tapfind_core::{DriverContext, LocatorBuilder, PageDefinition, PageError};

fn android_builder() -> LocatorBuilder {
    LocatorBuilder::new(DriverContext::new("Android", "UiAutomator2"))
}

const LOGIN_PAGE: &str = r#"
name: login
fields:
  - name: username
    find_by: { using: id, value: username }
    android:
      - by:
          selector: { using: accessibility id, value: Username }
  - name: password
    find_by: { using: css selector, value: "input[type=password]" }
  - name: submit
    android:
      - by:
          selector: { using: -android uiautomator, value: new UiSelector().text("Sign In") }
          priority: 2
      - by:
          selector: { using: id, value: submit }
          priority: 1
    cache_lookup: true
"#;

#[test]
fn test_page_definition_parses_from_yaml() {
    let page = PageDefinition::from_yaml(LOGIN_PAGE).unwrap();

    assert_eq!(page.name, "login");
    assert_eq!(page.fields.len(), 3);
    assert_eq!(page.fields[0].name, "username");
    assert_eq!(
        page.fields[0].find_by,
        Some(Selector::Id("username".into()))
    );
    assert_eq!(page.fields[0].android.len(), 1);
    assert!(page.fields[2].cache_lookup);
}

#[test]
fn test_page_resolution_covers_every_field() {
    let page = PageDefinition::from_yaml(LOGIN_PAGE).unwrap();
    let resolved = page.resolve(&android_builder()).unwrap();

    assert_eq!(resolved.len(), 3);

    let username = &resolved[0];
    assert_eq!(username.name, "username");
    assert_eq!(
        username.locator.locator_for(ContentType::HtmlOrDefault),
        &Locator::single(Selector::Id("username".into()))
    );
    assert_eq!(
        username.locator.locator_for(ContentType::NativeMobileSpecific),
        &Locator::Chained(vec![Locator::single(Selector::AccessibilityId(
            "Username".into()
        ))])
    );

    // No native declarations: the default locator serves both contexts.
    let password = &resolved[1];
    assert_eq!(
        password.locator.locator_for(ContentType::NativeMobileSpecific),
        password.locator.locator_for(ContentType::HtmlOrDefault)
    );

    // Priority 1 sorts before priority 2, and the cache flag survives.
    let submit = &resolved[2];
    assert_eq!(
        submit.locator.locator_for(ContentType::NativeMobileSpecific),
        &Locator::Chained(vec![
            Locator::single(Selector::Id("submit".into())),
            Locator::single(Selector::AndroidUiAutomator(
                "new UiSelector().text(\"Sign In\")".into()
            )),
        ])
    );
    assert!(submit.cache_lookup);
}

#[test]
fn test_duplicate_field_names_are_rejected() {
    let page = PageDefinition::from_yaml(
        r#"
fields:
  - name: ok
  - name: ok
"#,
    )
    .unwrap();

    let err = page.resolve(&android_builder()).unwrap_err();
    assert!(matches!(err, PageError::DuplicateField(name) if name == "ok"));
}

#[test]
fn test_build_errors_carry_the_field_name() {
    let page = PageDefinition::from_yaml(
        r#"
fields:
  - name: broken
    find_by: { using: id, value: a }
    find_all:
      - { using: name, value: b }
"#,
    )
    .unwrap();

    let err = page.resolve(&android_builder()).unwrap_err();
    assert!(matches!(err, PageError::Build { field, .. } if field == "broken"));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let err = PageDefinition::from_yaml("fields: {not-a-list: true}").unwrap_err();
    assert!(matches!(err, PageError::Parse(_)));
}
