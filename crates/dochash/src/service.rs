//! Actor front-end for a [`DocumentHasher`].
//!
//! A single tokio task owns the hasher and handles one request at a time, in
//! arrival order. Any number of [`HasherHandle`]s can submit requests
//! concurrently; each gets its answer on a oneshot channel.

use bytes::Bytes;
use dochash_core::{Digest, DocumentId, DocumentKey, Identity, OwnerKey, RecordView};
use dochash_store::Store;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::document::DocumentHasher;
use crate::error::{HasherError, Result};

type Reply<T> = oneshot::Sender<Result<T>>;

/// A request to the hasher task.
#[derive(Debug)]
enum Command {
    Create {
        caller: Identity,
        owner_key: OwnerKey,
        document_id: DocumentId,
        content: Bytes,
        reply: Reply<Digest>,
    },
    Read {
        caller: Identity,
        owner_key: OwnerKey,
        document_id: DocumentId,
        reply: Reply<Digest>,
    },
    Describe {
        caller: Identity,
        owner_key: OwnerKey,
        document_id: DocumentId,
        reply: Reply<RecordView>,
    },
    Update {
        caller: Identity,
        owner_key: OwnerKey,
        document_id: DocumentId,
        content: Bytes,
        reply: Reply<Digest>,
    },
    ChangeOwner {
        caller: Identity,
        owner_key: OwnerKey,
        document_id: DocumentId,
        new_owner: Identity,
        reply: Reply<()>,
    },
    VerifyByContent {
        owner_key: OwnerKey,
        document_id: DocumentId,
        content: Bytes,
        reply: Reply<bool>,
    },
    VerifyByDigest {
        owner_key: OwnerKey,
        candidate: Digest,
        reply: Reply<bool>,
    },
    VerifyDigestAt {
        owner_key: OwnerKey,
        document_id: DocumentId,
        candidate: Digest,
        reply: Reply<bool>,
    },
    Shutdown,
}

/// The task side: owns the hasher and drains the request queue.
pub struct HasherService<S: Store<DocumentKey>> {
    hasher: DocumentHasher<S>,
    requests: mpsc::Receiver<Command>,
}

impl<S: Store<DocumentKey> + 'static> HasherService<S> {
    /// Spawn the hasher onto the current tokio runtime.
    ///
    /// The join handle yields the hasher back once the service stops, which
    /// happens when every handle is dropped or [`HasherHandle::shutdown`] is
    /// called.
    pub fn spawn(hasher: DocumentHasher<S>) -> (HasherHandle, JoinHandle<DocumentHasher<S>>) {
        let (tx, rx) = mpsc::channel(hasher.config().queue_capacity);
        let service = HasherService {
            hasher,
            requests: rx,
        };
        let task = tokio::spawn(service.run());
        (HasherHandle { requests: tx }, task)
    }

    async fn run(mut self) -> DocumentHasher<S> {
        tracing::debug!(contract_owner = %self.hasher.contract_owner(), "hasher service started");

        while let Some(command) = self.requests.recv().await {
            if !self.handle(command) {
                break;
            }
        }

        tracing::debug!("hasher service stopped");
        self.hasher
    }

    /// Apply one command. Returns `false` on shutdown.
    fn handle(&self, command: Command) -> bool {
        let h = &self.hasher;
        // A dropped reply receiver means the caller gave up; nothing to do.
        match command {
            Command::Create {
                caller,
                owner_key,
                document_id,
                content,
                reply,
            } => {
                let _ = reply.send(h.create(&caller, owner_key, document_id, &content));
            }
            Command::Read {
                caller,
                owner_key,
                document_id,
                reply,
            } => {
                let _ = reply.send(h.read(&caller, owner_key, document_id));
            }
            Command::Describe {
                caller,
                owner_key,
                document_id,
                reply,
            } => {
                let _ = reply.send(h.describe(&caller, owner_key, document_id));
            }
            Command::Update {
                caller,
                owner_key,
                document_id,
                content,
                reply,
            } => {
                let _ = reply.send(h.update(&caller, owner_key, document_id, &content));
            }
            Command::ChangeOwner {
                caller,
                owner_key,
                document_id,
                new_owner,
                reply,
            } => {
                let _ = reply.send(h.change_owner(&caller, owner_key, document_id, new_owner));
            }
            Command::VerifyByContent {
                owner_key,
                document_id,
                content,
                reply,
            } => {
                let _ = reply.send(h.verify_by_content(owner_key, document_id, &content));
            }
            Command::VerifyByDigest {
                owner_key,
                candidate,
                reply,
            } => {
                let _ = reply.send(h.verify_by_digest(owner_key, &candidate));
            }
            Command::VerifyDigestAt {
                owner_key,
                document_id,
                candidate,
                reply,
            } => {
                let _ = reply.send(h.verify_digest_at(owner_key, document_id, &candidate));
            }
            Command::Shutdown => return false,
        }
        true
    }
}

/// Cloneable client for a running [`HasherService`].
#[derive(Debug, Clone)]
pub struct HasherHandle {
    requests: mpsc::Sender<Command>,
}

impl HasherHandle {
    async fn call<T>(&self, build: impl FnOnce(Reply<T>) -> Command) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.requests
            .send(build(tx))
            .await
            .map_err(|_| HasherError::ServiceClosed)?;
        rx.await.map_err(|_| HasherError::ServiceClosed)?
    }

    pub async fn create(
        &self,
        caller: Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        content: impl Into<Bytes>,
    ) -> Result<Digest> {
        let (owner_key, document_id, content) = (owner_key.into(), document_id.into(), content.into());
        self.call(|reply| Command::Create {
            caller,
            owner_key,
            document_id,
            content,
            reply,
        })
        .await
    }

    pub async fn read(
        &self,
        caller: Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
    ) -> Result<Digest> {
        let (owner_key, document_id) = (owner_key.into(), document_id.into());
        self.call(|reply| Command::Read {
            caller,
            owner_key,
            document_id,
            reply,
        })
        .await
    }

    pub async fn describe(
        &self,
        caller: Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
    ) -> Result<RecordView> {
        let (owner_key, document_id) = (owner_key.into(), document_id.into());
        self.call(|reply| Command::Describe {
            caller,
            owner_key,
            document_id,
            reply,
        })
        .await
    }

    pub async fn update(
        &self,
        caller: Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        content: impl Into<Bytes>,
    ) -> Result<Digest> {
        let (owner_key, document_id, content) = (owner_key.into(), document_id.into(), content.into());
        self.call(|reply| Command::Update {
            caller,
            owner_key,
            document_id,
            content,
            reply,
        })
        .await
    }

    pub async fn change_owner(
        &self,
        caller: Identity,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        new_owner: impl Into<Identity>,
    ) -> Result<()> {
        let (owner_key, document_id, new_owner) =
            (owner_key.into(), document_id.into(), new_owner.into());
        self.call(|reply| Command::ChangeOwner {
            caller,
            owner_key,
            document_id,
            new_owner,
            reply,
        })
        .await
    }

    pub async fn verify_by_content(
        &self,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        content: impl Into<Bytes>,
    ) -> Result<bool> {
        let (owner_key, document_id, content) = (owner_key.into(), document_id.into(), content.into());
        self.call(|reply| Command::VerifyByContent {
            owner_key,
            document_id,
            content,
            reply,
        })
        .await
    }

    pub async fn verify_by_digest(
        &self,
        owner_key: impl Into<OwnerKey>,
        candidate: Digest,
    ) -> Result<bool> {
        let owner_key = owner_key.into();
        self.call(|reply| Command::VerifyByDigest {
            owner_key,
            candidate,
            reply,
        })
        .await
    }

    pub async fn verify_digest_at(
        &self,
        owner_key: impl Into<OwnerKey>,
        document_id: impl Into<DocumentId>,
        candidate: Digest,
    ) -> Result<bool> {
        let (owner_key, document_id) = (owner_key.into(), document_id.into());
        self.call(|reply| Command::VerifyDigestAt {
            owner_key,
            document_id,
            candidate,
            reply,
        })
        .await
    }

    /// Ask the service to stop after the requests already queued.
    pub async fn shutdown(&self) -> Result<()> {
        self.requests
            .send(Command::Shutdown)
            .await
            .map_err(|_| HasherError::ServiceClosed)
    }
}
