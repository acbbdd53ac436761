use super::*;

/// Tests listing an empty store.
///
/// Expected: Ok with no bindings
#[tokio::test]
async fn returns_empty_when_no_bindings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bindings = ReactionRoleRepository::new(db).list_all().await?;

    assert!(bindings.is_empty());

    Ok(())
}

/// Tests listing converts every stored row into a binding.
///
/// Verifies that snowflakes are parsed and both unicode and custom emoji are
/// decoded from their stored form.
///
/// Expected: Ok with all bindings in insertion order
#[tokio::test]
async fn lists_all_bindings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("🍕")
        .build()
        .await?;
    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("201")
        .reaction("<a:dance:300>")
        .build()
        .await?;

    let bindings = ReactionRoleRepository::new(db).list_all().await?;

    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].message_id, 100);
    assert_eq!(bindings[0].role_id, 200);
    assert_eq!(bindings[0].reaction, unicode("🍕"));
    assert_eq!(bindings[1].role_id, 201);
    assert_eq!(bindings[1].reaction, custom("dance", 300, true));

    Ok(())
}

/// Tests listing skips rows that cannot be parsed.
///
/// Verifies that a non-numeric snowflake and an unparsable reaction each drop only
/// their own row.
///
/// Expected: Ok with only the well-formed binding
#[tokio::test]
async fn skips_malformed_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("not-a-number")
        .build()
        .await?;
    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("<broken>")
        .build()
        .await?;
    ReactionRoleFactory::new(db)
        .message_id("101")
        .role_id("201")
        .reaction("🍕")
        .build()
        .await?;

    let bindings = ReactionRoleRepository::new(db).list_all().await?;

    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].message_id, 101);
    assert_eq!(bindings[0].reaction, unicode("🍕"));

    Ok(())
}
