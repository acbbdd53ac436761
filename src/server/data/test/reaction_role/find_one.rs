use super::*;

/// Tests finding a binding by message and unicode emoji.
///
/// Expected: Ok(Some) with the bound role
#[tokio::test]
async fn finds_binding_for_unicode_emoji() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("🍕")
        .build()
        .await?;

    let binding = ReactionRoleRepository::new(db)
        .find_one(100, &unicode("🍕"))
        .await?;

    assert_eq!(binding.map(|b| b.role_id), Some(200));

    Ok(())
}

/// Tests the lookup requires both message and emoji to match.
///
/// Expected: Ok(None) for a different emoji on the same message and for the same
/// emoji on a different message
#[tokio::test]
async fn returns_none_for_unbound_pairing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("🍕")
        .build()
        .await?;

    let repo = ReactionRoleRepository::new(db);

    assert!(repo.find_one(100, &unicode("🍔")).await?.is_none());
    assert!(repo.find_one(101, &unicode("🍕")).await?.is_none());

    Ok(())
}

/// Tests a custom emoji matches regardless of its animated flag.
///
/// Verifies that a binding stored with the static spelling is found by an
/// animated reaction carrying the same name and id, and the other way round.
///
/// Expected: Ok(Some) for both spellings
#[tokio::test]
async fn matches_custom_emoji_across_spellings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("<:pog:300>")
        .build()
        .await?;
    ReactionRoleFactory::new(db)
        .message_id("101")
        .role_id("201")
        .reaction("<a:dance:301>")
        .build()
        .await?;

    let repo = ReactionRoleRepository::new(db);

    let animated = repo.find_one(100, &custom("pog", 300, true)).await?;
    assert_eq!(animated.map(|b| b.role_id), Some(200));

    let static_form = repo.find_one(101, &custom("dance", 301, false)).await?;
    assert_eq!(static_form.map(|b| b.role_id), Some(201));

    Ok(())
}

/// Tests a custom emoji with a different id does not match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_custom_emoji_with_other_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .reaction("<:pog:300>")
        .build()
        .await?;

    let binding = ReactionRoleRepository::new(db)
        .find_one(100, &custom("pog", 999, false))
        .await?;

    assert!(binding.is_none());

    Ok(())
}

/// Tests a row stored in the bare `<name:id>` form is still found.
///
/// Expected: Ok(Some) for a static reaction of the same emoji
#[tokio::test]
async fn matches_legacy_bare_custom_spelling() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("<pog:300>")
        .build()
        .await?;

    let binding = ReactionRoleRepository::new(db)
        .find_one(100, &custom("pog", 300, false))
        .await?;

    assert_eq!(binding.map(|b| b.role_id), Some(200));

    Ok(())
}

/// Tests a malformed row ahead of a valid one does not hide the valid binding.
///
/// Expected: Ok(Some) with the role of the well-formed row
#[tokio::test]
async fn skips_malformed_candidate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("not-a-role")
        .reaction("🍕")
        .build()
        .await?;
    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .reaction("🍕")
        .build()
        .await?;

    let binding = ReactionRoleRepository::new(db)
        .find_one(100, &unicode("🍕"))
        .await?;

    assert_eq!(binding.map(|b| b.role_id), Some(200));

    Ok(())
}
