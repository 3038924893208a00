use actor_framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u64,
    name: String,
    logins: u32,
}

#[derive(Debug)]
struct SimpleUserCreate {
    name: String,
}

#[derive(Debug)]
struct SimpleUserUpdate {
    name: Option<String>,
    logins: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
#[error("Simple user error: {0}")]
struct SimpleUserError(&'static str);

impl ActorEntity for SimpleUser {
    type Id = u64;
    type Create = SimpleUserCreate;
    type Update = SimpleUserUpdate;
    type Context = ();
    type Error = SimpleUserError;

    fn from_create_params(id: u64, params: SimpleUserCreate, _ctx: &()) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(SimpleUserError("empty name"));
        }
        Ok(Self {
            id,
            name: params.name,
            logins: 0,
        })
    }

    fn on_update(&mut self, update: SimpleUserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        // Applies the name first so a rejected login count exercises the rollback.
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(logins) = update.logins {
            if logins < self.logins {
                return Err(SimpleUserError("logins cannot go down"));
            }
            self.logins = logins;
        }
        Ok(())
    }
}

fn create(name: &str) -> SimpleUserCreate {
    SimpleUserCreate { name: name.into() }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let alice: SimpleUser = client.create(create("Alice")).await.unwrap();
    assert_eq!(alice.id, 1); // First ID should be 1
    let carol = client.create(create("Carol")).await.unwrap();
    assert_eq!(carol.id, 2);

    // 2. List in creation order
    let all = client.list().await.unwrap();
    assert_eq!(all, vec![alice.clone(), carol.clone()]);

    // 3. Update
    let update = SimpleUserUpdate {
        name: Some("Bob".into()),
        logins: Some(3),
    };
    let updated = client.update(alice.id, update).await.unwrap();
    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.logins, 3);
    assert_eq!(client.get(alice.id).await.unwrap(), Some(updated.clone()));

    // 4. Delete returns what was removed
    let removed = client.delete(alice.id).await.unwrap();
    assert_eq!(removed, updated);
    assert!(client.get(alice.id).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap(), vec![carol]);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    assert!(client.get(42).await.unwrap().is_none());

    let update = SimpleUserUpdate {
        name: Some("Nobody".into()),
        logins: None,
    };
    let result = client.update(42, update).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));

    let result = client.delete(42).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    let first = client.create(create("first")).await.unwrap();
    let second = client.create(create("second")).await.unwrap();
    client.delete(second.id).await.unwrap();
    client.delete(first.id).await.unwrap();

    let third = client.create(create("third")).await.unwrap();
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn test_rejected_create_consumes_an_id() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(create("")).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(client.list().await.unwrap().is_empty());

    let user = client.create(create("Dave")).await.unwrap();
    assert_eq!(user.id, 2);
}

#[tokio::test]
async fn test_failed_update_leaves_record_unchanged() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    tokio::spawn(actor.run(()));

    let user = client.create(create("Erin")).await.unwrap();
    let bumped = client
        .update(
            user.id,
            SimpleUserUpdate {
                name: None,
                logins: Some(5),
            },
        )
        .await
        .unwrap();

    let result = client
        .update(
            user.id,
            SimpleUserUpdate {
                name: Some("Mallory".into()),
                logins: Some(1),
            },
        )
        .await;
    match result {
        Err(FrameworkError::EntityError(e)) => {
            assert_eq!(e.to_string(), "Simple user error: logins cannot go down")
        }
        other => panic!("expected entity error, got {other:?}"),
    }

    let stored = client.get(user.id).await.unwrap().unwrap();
    assert_eq!(stored, bumped);
    assert_eq!(stored.name, "Erin");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(4);
    tokio::spawn(actor.run(()));

    let mut handles = Vec::new();
    for i in 0..50 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(create(&format!("user-{i}"))).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
