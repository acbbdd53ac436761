use super::*;

/// Tests deleting by message and role removes only that binding.
///
/// Expected: Ok(1) and the other binding on the message remains
#[tokio::test]
async fn deletes_by_message_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("200")
        .build()
        .await?;
    ReactionRoleFactory::new(db)
        .message_id("100")
        .role_id("201")
        .build()
        .await?;

    let repo = ReactionRoleRepository::new(db);
    let removed = repo.delete(100, 200).await?;

    assert_eq!(removed, 1);
    let remaining = repo.list_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].role_id, 201);

    Ok(())
}

/// Tests deleting a pair that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_reports_zero_for_missing_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let removed = ReactionRoleRepository::new(db).delete(100, 200).await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests deleting by surrogate id.
///
/// Expected: Ok(1) then Ok(0) on the second attempt
#[tokio::test]
async fn deletes_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = ReactionRoleFactory::new(db).build().await?;

    let repo = ReactionRoleRepository::new(db);
    assert_eq!(repo.delete_by_id(row.id).await?, 1);
    assert_eq!(repo.delete_by_id(row.id).await?, 0);
    assert_eq!(ReactionRole::find().count(db).await?, 0);

    Ok(())
}

/// Tests the pair can be bound again after deletion.
///
/// Expected: Ok on re-creating a deleted (message, role) pair
#[tokio::test]
async fn allows_rebinding_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    let param = CreateReactionRoleParam {
        message_id: 100,
        role_id: 200,
        reaction: unicode("🍕"),
    };
    repo.create(param.clone()).await?;
    repo.delete(100, 200).await?;
    repo.create(param).await?;

    assert_eq!(repo.list_all().await?.len(), 1);

    Ok(())
}
