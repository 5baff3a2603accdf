use actor_framework::probe::spawn_probe;
use actor_framework::{
    Actor, ActorContext, ActorPath, ActorSystem, DuplicatePolicy, FrameworkError, StatelessActor,
    SystemConfig, SystemEvent,
};
use async_trait::async_trait;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

// --- Test Actors ---

#[derive(Debug, Clone, PartialEq)]
enum Cmd {
    Push(u32),
    Fail,
    Panic,
    ForwardTo(ActorPath, u32),
    SpawnChild(String),
}

/// Appends every pushed number to its state.
struct Recorder;

#[derive(Debug, thiserror::Error)]
#[error("recorder refused the message")]
struct RecorderError;

#[async_trait]
impl Actor<Cmd> for Recorder {
    type State = Vec<u32>;
    type Error = RecorderError;

    async fn handle(
        &self,
        state: &Vec<u32>,
        msg: Cmd,
        ctx: &ActorContext<Cmd>,
    ) -> Result<Vec<u32>, RecorderError> {
        let mut next = state.clone();
        match msg {
            Cmd::Push(n) => next.push(n),
            Cmd::Fail => return Err(RecorderError),
            Cmd::Panic => panic!("recorder blew up"),
            Cmd::ForwardTo(to, n) => ctx.dispatch(&to, Cmd::Push(n)),
            Cmd::SpawnChild(name) => {
                ctx.spawn_child(&name, Recorder, Vec::new())
                    .map_err(|_| RecorderError)?;
            }
        }
        Ok(next)
    }
}

struct Relay {
    target: ActorPath,
}

#[async_trait]
impl StatelessActor<Cmd> for Relay {
    type Error = Infallible;

    async fn handle(&self, msg: Cmd, ctx: &ActorContext<Cmd>) -> Result<(), Infallible> {
        ctx.dispatch(&self.target, msg);
        Ok(())
    }
}

/// Sleeps `n` milliseconds on every push, then counts it.
struct Slow {
    finished: Arc<AtomicUsize>,
}

#[async_trait]
impl Actor<Cmd> for Slow {
    type State = ();
    type Error = Infallible;

    async fn handle(&self, _state: &(), msg: Cmd, _ctx: &ActorContext<Cmd>) -> Result<(), Infallible> {
        if let Cmd::Push(ms) = msg {
            tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

fn system(name: &str) -> ActorSystem<Cmd> {
    ActorSystem::new(SystemConfig::new(name))
}

async fn next_fault(events: &mut broadcast::Receiver<SystemEvent>) -> SystemEvent {
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event bus closed");
        if event.is_fault() {
            return event;
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_messages_are_processed_in_arrival_order() {
    let system = system("fifo");
    let recorder = system
        .spawn(&system.root(), "recorder", Recorder, Vec::new())
        .unwrap();

    for n in 0..100 {
        system.dispatch(&recorder, Cmd::Push(n));
    }

    let state: Vec<u32> = system.snapshot(&recorder).await.unwrap();
    assert_eq!(state, (0..100).collect::<Vec<_>>());
    system.shutdown().await;
}

#[tokio::test]
async fn test_dispatch_to_unknown_path_is_a_dead_letter() {
    let system = system("dead");
    let mut events = system.events();
    let recorder = system
        .spawn(&system.root(), "recorder", Recorder, Vec::new())
        .unwrap();

    let ghost = system.root().child("nobody");
    system.dispatch(&ghost, Cmd::Push(1));

    match next_fault(&mut events).await {
        SystemEvent::DeadLetter { to, message } => {
            assert_eq!(to, ghost);
            assert!(message.contains("Push(1)"));
        }
        other => panic!("unexpected event {other:?}"),
    }

    // Nothing else changed.
    assert_eq!(system.len(), 1);
    let state: Vec<u32> = system.snapshot(&recorder).await.unwrap();
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_duplicate_spawn_replace_policy_routes_to_newest() {
    let system = system("replace");
    let root = system.root();
    let first = system.spawn(&root, "r", Recorder, vec![1]).unwrap();
    let second = system.spawn(&root, "r", Recorder, vec![2]).unwrap();
    assert_eq!(first, second);

    system.dispatch(&second, Cmd::Push(3));
    let state: Vec<u32> = system.snapshot(&second).await.unwrap();
    assert_eq!(state, vec![2, 3]);
    assert_eq!(system.len(), 1);
}

#[tokio::test]
async fn test_duplicate_spawn_reject_policy_fails() {
    let system = ActorSystem::<Cmd>::new(
        SystemConfig::new("reject").with_duplicate_policy(DuplicatePolicy::Reject),
    );
    let root = system.root();
    let path = system.spawn(&root, "r", Recorder, vec![1]).unwrap();

    let err = system.spawn(&root, "r", Recorder, vec![2]).unwrap_err();
    assert_eq!(err, FrameworkError::DuplicateActor(path.clone()));

    let state: Vec<u32> = system.snapshot(&path).await.unwrap();
    assert_eq!(state, vec![1]);
}

#[tokio::test]
async fn test_invalid_and_foreign_spawns_are_refused() {
    let system = system("names");
    let root = system.root();
    assert!(matches!(
        system.spawn(&root, "", Recorder, Vec::new()),
        Err(FrameworkError::InvalidName(_))
    ));
    assert!(matches!(
        system.spawn(&root, "a/b", Recorder, Vec::new()),
        Err(FrameworkError::InvalidName(_))
    ));
    assert!(matches!(
        system.spawn(&ActorPath::root("elsewhere"), "a", Recorder, Vec::new()),
        Err(FrameworkError::ForeignPath { .. })
    ));
}

#[tokio::test]
async fn test_handler_error_keeps_previous_state() {
    let system = system("errors");
    let mut events = system.events();
    let path = system
        .spawn(&system.root(), "r", Recorder, Vec::new())
        .unwrap();

    system.dispatch(&path, Cmd::Push(1));
    system.dispatch(&path, Cmd::Fail);
    system.dispatch(&path, Cmd::Push(2));

    assert!(matches!(
        next_fault(&mut events).await,
        SystemEvent::HandlerFailed { .. }
    ));
    let state: Vec<u32> = system.snapshot(&path).await.unwrap();
    assert_eq!(state, vec![1, 2]);
}

#[tokio::test]
async fn test_panicking_handler_is_isolated() {
    let system = system("panics");
    let mut events = system.events();
    let root = system.root();
    let fragile = system.spawn(&root, "fragile", Recorder, Vec::new()).unwrap();
    let bystander = system.spawn(&root, "bystander", Recorder, Vec::new()).unwrap();

    system.dispatch(&fragile, Cmd::Push(1));
    system.dispatch(&fragile, Cmd::Panic);
    system.dispatch(&fragile, Cmd::Push(2));
    system.dispatch(&bystander, Cmd::Push(9));

    match next_fault(&mut events).await {
        SystemEvent::HandlerPanicked { path, reason } => {
            assert_eq!(path, fragile);
            assert!(reason.contains("recorder blew up"));
        }
        other => panic!("unexpected event {other:?}"),
    }

    let state: Vec<u32> = system.snapshot(&fragile).await.unwrap();
    assert_eq!(state, vec![1, 2]);
    let state: Vec<u32> = system.snapshot(&bystander).await.unwrap();
    assert_eq!(state, vec![9]);
}

#[tokio::test]
async fn test_context_knows_its_place_and_spawns_children() {
    let system = system("tree");
    let parent = system
        .spawn(&system.root(), "parent", Recorder, Vec::new())
        .unwrap();

    system.dispatch(&parent, Cmd::SpawnChild("kid-1".into()));
    system.dispatch(&parent, Cmd::SpawnChild("kid-2".into()));
    // Snapshot is queued behind both spawns.
    let _: Vec<u32> = system.snapshot(&parent).await.unwrap();

    let children = system.children(&parent);
    assert_eq!(
        children,
        vec![parent.child("kid-1"), parent.child("kid-2")]
    );
    assert!(system.contains(&parent.child("kid-1")));
    assert!(system.children(&parent.child("kid-1")).is_empty());
}

#[tokio::test]
async fn test_stateless_actor_relays() {
    let system = system("stateless");
    let (sink, mut probe) = spawn_probe(&system, &system.root(), "sink").unwrap();
    let relay = system
        .spawn_stateless("relay", Relay { target: sink.clone() })
        .unwrap();

    assert_eq!(relay, system.root().child("relay"));
    system.dispatch(&relay, Cmd::Push(5));
    let received = probe.expect_message().await.unwrap();
    assert_eq!(received.message, Cmd::Push(5));

    assert!(system.snapshot::<()>(&relay).await.is_ok());
}

#[tokio::test]
async fn test_dispatch_after_arrives_later() {
    let system = system("timer");
    let (sink, mut probe) = spawn_probe(&system, &system.root(), "sink").unwrap();

    let sent_at = tokio::time::Instant::now();
    system.dispatch_after(Duration::from_millis(50), sink.clone(), Cmd::Push(1));
    system.dispatch(&sink, Cmd::Push(0));

    let first = probe.expect_message().await.unwrap();
    let second = probe.expect_message().await.unwrap();
    assert_eq!(first.message, Cmd::Push(0));
    assert_eq!(second.message, Cmd::Push(1));
    assert!(second.at.duration_since(sent_at) >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_snapshot_errors() {
    let system = system("snapshots");
    let path = system
        .spawn(&system.root(), "r", Recorder, Vec::new())
        .unwrap();

    assert_eq!(
        system.snapshot::<String>(&path).await,
        Err(FrameworkError::StateMismatch(path.clone()))
    );
    let ghost = system.root().child("ghost");
    assert_eq!(
        system.snapshot::<Vec<u32>>(&ghost).await,
        Err(FrameworkError::NotFound(ghost))
    );
}

#[tokio::test]
async fn test_forwarding_between_actors_and_shutdown() {
    let system = system("shutdown");
    let root = system.root();
    let a = system.spawn(&root, "a", Recorder, Vec::new()).unwrap();
    let b = system.spawn(&root, "b", Recorder, Vec::new()).unwrap();

    system.dispatch(&a, Cmd::ForwardTo(b.clone(), 7));
    system.dispatch(&a, Cmd::Push(1));
    let _: Vec<u32> = system.snapshot(&a).await.unwrap();
    let state: Vec<u32> = system.snapshot(&b).await.unwrap();
    assert_eq!(state, vec![7]);

    system.shutdown().await;
    assert!(system.is_empty());
    assert_eq!(
        system.snapshot::<Vec<u32>>(&a).await,
        Err(FrameworkError::NotFound(a))
    );
}

#[tokio::test]
async fn test_shutdown_waits_for_replaced_actors() {
    let system = system("retired");
    let root = system.root();
    let finished = Arc::new(AtomicUsize::new(0));
    let slow = Slow {
        finished: Arc::clone(&finished),
    };
    let path = system.spawn(&root, "slow", slow, ()).unwrap();

    // Queued in the first actor's mailbox before it is replaced.
    system.dispatch(&path, Cmd::Push(100));
    system.spawn(&root, "slow", Recorder, Vec::new()).unwrap();

    system.shutdown().await;
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}
