//! Session state store with synchronous subscriber notification.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use wallet_core::{TransactionExecutor, WalletAccount, WalletProvider};

use crate::error::{Result, SessionError};

type Callback = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Token returned by [`SessionStore::subscribe`].
///
/// Each subscription gets its own token, even for the same callback;
/// unsubscribing one leaves the others registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Immutable view of the session state.
///
/// Snapshots are detached from the store: mutating a snapshot (or anything
/// reachable from it) never changes what later snapshots observe.
#[derive(Clone)]
pub struct SessionSnapshot {
    /// Resolved wallet provider, if discovery has completed
    pub wallet: Option<Arc<dyn WalletProvider>>,

    /// Connected accounts, if any
    pub accounts: Option<Vec<WalletAccount>>,

    /// Derived: accounts present and non-empty
    pub is_connected: bool,
}

impl SessionSnapshot {
    /// The account used for signing (first connected account).
    pub fn primary_account(&self) -> Option<&WalletAccount> {
        self.accounts.as_ref().and_then(|accounts| accounts.first())
    }
}

impl fmt::Debug for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSnapshot")
            .field("wallet", &self.wallet.as_ref().map(|w| w.name().to_string()))
            .field("accounts", &self.accounts)
            .field("is_connected", &self.is_connected)
            .finish()
    }
}

struct Inner {
    wallet: Option<Arc<dyn WalletProvider>>,
    accounts: Option<Vec<WalletAccount>>,
    subscribers: Vec<(SubscriberId, Callback)>,
    next_subscriber: u64,
}

impl Inner {
    fn snapshot(&self) -> SessionSnapshot {
        let is_connected = self
            .accounts
            .as_ref()
            .is_some_and(|accounts| !accounts.is_empty());

        SessionSnapshot {
            wallet: self.wallet.clone(),
            accounts: self.accounts.clone(),
            is_connected,
        }
    }
}

/// Holds the wallet/account/connection state and the RPC client handle.
///
/// Construct one store per application and share it via `Arc`. State is
/// mutated only through the setters below; every mutation notifies all
/// subscribers synchronously, in registration order, with a fresh
/// snapshot. Callbacks run on the mutating task, after the store lock has
/// been released, so a callback may safely call back into the store.
pub struct SessionStore {
    inner: Mutex<Inner>,
    executor: Option<Arc<dyn TransactionExecutor>>,
}

impl SessionStore {
    /// Store with an RPC client for transaction execution.
    pub fn new(executor: Arc<dyn TransactionExecutor>) -> Self {
        Self::build(Some(executor))
    }

    /// Store without an RPC client; transaction flows will fail with
    /// [`SessionError::ClientUnavailable`].
    pub fn without_executor() -> Self {
        Self::build(None)
    }

    fn build(executor: Option<Arc<dyn TransactionExecutor>>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                wallet: None,
                accounts: None,
                subscribers: Vec::new(),
                next_subscriber: 0,
            }),
            executor,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("session store lock poisoned")
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// The resolved wallet provider, if any.
    pub fn wallet(&self) -> Option<Arc<dyn WalletProvider>> {
        self.lock().wallet.clone()
    }

    /// The RPC client this store was built with.
    pub fn executor(&self) -> Result<Arc<dyn TransactionExecutor>> {
        self.executor
            .clone()
            .ok_or(SessionError::ClientUnavailable)
    }

    /// Assign the resolved wallet provider and notify subscribers.
    pub fn set_wallet(&self, wallet: Arc<dyn WalletProvider>) {
        let (snapshot, subscribers) = {
            let mut inner = self.lock();
            inner.wallet = Some(wallet);
            (inner.snapshot(), collect_callbacks(&inner))
        };
        notify(&snapshot, &subscribers);
    }

    /// Replace the connected accounts (or clear them with `None`) and
    /// notify subscribers. `is_connected` is recomputed from the new value.
    pub fn set_accounts(&self, accounts: Option<Vec<WalletAccount>>) {
        let (snapshot, subscribers) = {
            let mut inner = self.lock();
            inner.accounts = accounts;
            (inner.snapshot(), collect_callbacks(&inner))
        };
        notify(&snapshot, &subscribers);
    }

    /// Register a callback invoked with a snapshot on every state change.
    ///
    /// Subscriptions are independent: registering the same callback twice
    /// yields two tokens and two notifications per change.
    pub fn subscribe(
        &self,
        callback: impl Fn(&SessionSnapshot) + Send + Sync + 'static,
    ) -> SubscriberId {
        let mut inner = self.lock();
        let id = SubscriberId(inner.next_subscriber);
        inner.next_subscriber += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if the token was already
    /// removed. The callback receives no notifications for mutations made
    /// after this call returns.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }
}

fn collect_callbacks(inner: &Inner) -> Vec<Callback> {
    inner
        .subscribers
        .iter()
        .map(|(_, callback)| callback.clone())
        .collect()
}

fn notify(snapshot: &SessionSnapshot, subscribers: &[Callback]) {
    for callback in subscribers {
        callback(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use wallet_core::{AccountAddress, ChainId};

    use super::*;

    fn account(address: &str, chain: &str) -> WalletAccount {
        WalletAccount::new(AccountAddress::new(address), vec![ChainId::new(chain)])
    }

    #[test]
    fn is_connected_tracks_account_presence() {
        let store = SessionStore::without_executor();
        assert!(!store.snapshot().is_connected);

        store.set_accounts(Some(vec![account("0xAA", "sui:testnet")]));
        assert!(store.snapshot().is_connected);

        store.set_accounts(Some(Vec::new()));
        assert!(!store.snapshot().is_connected);

        store.set_accounts(None);
        assert!(!store.snapshot().is_connected);
    }

    #[test]
    fn snapshots_are_detached_from_the_store() {
        let store = SessionStore::without_executor();
        store.set_accounts(Some(vec![account("0xAA", "sui:testnet")]));

        let mut snapshot = store.snapshot();
        snapshot
            .accounts
            .as_mut()
            .unwrap()
            .push(account("0xBB", "sui:testnet"));

        assert_eq!(store.snapshot().accounts.unwrap().len(), 1);
    }

    #[test]
    fn set_accounts_notifies_each_prior_subscriber_once() {
        let store = SessionStore::without_executor();

        let notified = Arc::new(AtomicUsize::new(0));
        let connected = Arc::new(AtomicUsize::new(0));
        {
            let notified = notified.clone();
            let connected = connected.clone();
            store.subscribe(move |snapshot| {
                notified.fetch_add(1, Ordering::SeqCst);
                if snapshot.is_connected {
                    connected.fetch_add(1, Ordering::SeqCst);
                }
            });
        }

        store.set_accounts(Some(vec![account("0xAA", "sui:testnet")]));

        assert_eq!(notified.load(Ordering::SeqCst), 1);
        assert_eq!(connected.load(Ordering::SeqCst), 1);
        assert_eq!(
            store.snapshot().accounts.unwrap()[0].address,
            AccountAddress::new("0xAA")
        );
    }

    #[test]
    fn unsubscribed_callbacks_receive_nothing() {
        let store = SessionStore::without_executor();

        let notified = Arc::new(AtomicUsize::new(0));
        let id = {
            let notified = notified.clone();
            store.subscribe(move |_| {
                notified.fetch_add(1, Ordering::SeqCst);
            })
        };

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store.set_accounts(Some(vec![account("0xAA", "sui:testnet")]));
        store.set_accounts(None);

        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn notifications_run_in_registration_order() {
        let store = SessionStore::without_executor();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            store.subscribe(move |_| order.lock().unwrap().push(tag));
        }

        store.set_accounts(None);

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_subscriptions_are_independent() {
        let store = SessionStore::without_executor();
        let notified = Arc::new(AtomicUsize::new(0));

        let callback = {
            let notified = notified.clone();
            move |_: &SessionSnapshot| {
                notified.fetch_add(1, Ordering::SeqCst);
            }
        };
        let first = store.subscribe(callback.clone());
        let second = store.subscribe(callback);
        assert_ne!(first, second);

        store.set_accounts(None);
        assert_eq!(notified.load(Ordering::SeqCst), 2);

        store.unsubscribe(first);
        store.set_accounts(None);
        assert_eq!(notified.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn callbacks_may_reenter_the_store() {
        let store = Arc::new(SessionStore::without_executor());
        let seen = Arc::new(Mutex::new(Vec::new()));

        {
            let store = store.clone();
            let seen = seen.clone();
            store.clone().subscribe(move |snapshot| {
                // Re-entrant read must not deadlock
                let live = store.snapshot();
                seen.lock()
                    .unwrap()
                    .push((snapshot.is_connected, live.is_connected));
            });
        }

        store.set_accounts(Some(vec![account("0xAA", "sui:testnet")]));

        assert_eq!(*seen.lock().unwrap(), vec![(true, true)]);
    }
}
