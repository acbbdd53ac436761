use super::*;

/// Tests creating a binding stores the canonical reaction.
///
/// Expected: Ok with the created binding listed by the store
#[tokio::test]
async fn creates_binding() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    let created = repo
        .create(CreateReactionRoleParam {
            message_id: 100,
            role_id: 200,
            reaction: custom("pog", 300, false),
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.message_id, 100);
    assert_eq!(created.role_id, 200);

    let row = ReactionRole::find_by_id(created.id).one(db).await?.unwrap();
    assert_eq!(row.message_id, "100");
    assert_eq!(row.role_id, "200");
    assert_eq!(row.reaction, "<:pog:300>");

    assert_eq!(repo.list_all().await?, vec![created]);

    Ok(())
}

/// Tests one message can carry several bindings.
///
/// Expected: Ok for each distinct role on the same message
#[tokio::test]
async fn allows_many_roles_per_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    for (role_id, emoji) in [(200, "🍕"), (201, "🍔"), (202, "🌮")] {
        repo.create(CreateReactionRoleParam {
            message_id: 100,
            role_id,
            reaction: unicode(emoji),
        })
        .await?;
    }

    assert_eq!(ReactionRole::find().count(db).await?, 3);

    Ok(())
}

/// Tests a duplicate (message, role) pair is rejected.
///
/// Verifies that the second insert fails with a unique constraint violation and
/// that the original row is left untouched.
///
/// Expected: Err with `is_unique_violation()` and one stored row
#[tokio::test]
async fn rejects_duplicate_message_role_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    repo.create(CreateReactionRoleParam {
        message_id: 100,
        role_id: 200,
        reaction: unicode("🍕"),
    })
    .await?;

    let result = repo
        .create(CreateReactionRoleParam {
            message_id: 100,
            role_id: 200,
            reaction: unicode("🍔"),
        })
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().is_unique_violation());

    let bindings = repo.list_all().await?;
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].reaction, unicode("🍕"));

    Ok(())
}
