//! Property tests over arbitrary keys, owners and contents.

use dochash::{CreatePolicy, DocumentHasher, HasherConfig, Identity};
use dochash_testkit::generators::{algorithm, content, DocumentParams, OwnedDocument};
use proptest::prelude::*;

fn hasher_with(config: HasherConfig) -> DocumentHasher {
    DocumentHasher::in_memory(Identity::new("deployer"), config).unwrap()
}

fn create(hasher: &DocumentHasher, doc: &DocumentParams) -> dochash::Digest {
    hasher
        .create(
            &doc.owner(),
            doc.key.owner_key.clone(),
            doc.key.document_id.clone(),
            &doc.content,
        )
        .unwrap()
}

proptest! {
    #[test]
    fn create_then_read_returns_hash(doc: DocumentParams, alg in algorithm()) {
        let hasher = hasher_with(HasherConfig::default().with_algorithm(alg));
        let created = create(&hasher, &doc);

        let read = hasher
            .read(&doc.owner(), doc.key.owner_key.clone(), doc.key.document_id.clone())
            .unwrap();
        prop_assert_eq!(created, alg.digest(&doc.content));
        prop_assert_eq!(read, created);
    }

    #[test]
    fn update_replaces_hash(o: OwnedDocument) {
        let hasher = hasher_with(HasherConfig::default());
        let before = create(&hasher, &o.doc);
        let key = &o.doc.key;

        let after = hasher
            .update(&o.doc.owner(), key.owner_key.clone(), key.document_id.clone(), &o.next_content)
            .unwrap();

        prop_assert_ne!(before, after);
        prop_assert!(hasher
            .verify_by_content(key.owner_key.clone(), key.document_id.clone(), &o.next_content)
            .unwrap());
        prop_assert!(!hasher
            .verify_by_content(key.owner_key.clone(), key.document_id.clone(), &o.doc.content)
            .unwrap());
    }

    #[test]
    fn transfer_moves_every_right(o: OwnedDocument) {
        let hasher = hasher_with(HasherConfig::default());
        create(&hasher, &o.doc);
        let key = &o.doc.key;
        let old = o.doc.owner();
        let new = o.stranger.clone();

        hasher
            .change_owner(&old, key.owner_key.clone(), key.document_id.clone(), new.clone())
            .unwrap();

        let read = hasher.read(&old, key.owner_key.clone(), key.document_id.clone());
        let update = hasher.update(&old, key.owner_key.clone(), key.document_id.clone(), &o.next_content);
        let transfer = hasher.change_owner(&old, key.owner_key.clone(), key.document_id.clone(), old.clone());
        prop_assert!(read.unwrap_err().is_not_authorized());
        prop_assert!(update.unwrap_err().is_not_authorized());
        prop_assert!(transfer.unwrap_err().is_not_authorized());

        prop_assert!(hasher.read(&new, key.owner_key.clone(), key.document_id.clone()).is_ok());
        prop_assert!(hasher
            .update(&new, key.owner_key.clone(), key.document_id.clone(), &o.next_content)
            .is_ok());
        prop_assert!(hasher
            .change_owner(&new, key.owner_key.clone(), key.document_id.clone(), old.clone())
            .is_ok());
    }

    #[test]
    fn verify_only_matches_last_content(doc: DocumentParams, other in content(256)) {
        prop_assume!(other != doc.content);
        let hasher = hasher_with(HasherConfig::default());
        create(&hasher, &doc);
        let key = &doc.key;

        prop_assert!(hasher
            .verify_by_content(key.owner_key.clone(), key.document_id.clone(), &doc.content)
            .unwrap());
        prop_assert!(!hasher
            .verify_by_content(key.owner_key.clone(), key.document_id.clone(), &other)
            .unwrap());
    }

    #[test]
    fn unknown_key_is_not_found(doc: DocumentParams) {
        let hasher = hasher_with(HasherConfig::default());
        let key = &doc.key;
        let owner = doc.owner();

        prop_assert!(hasher.read(&owner, key.owner_key.clone(), key.document_id.clone()).unwrap_err().is_not_found());
        prop_assert!(hasher.update(&owner, key.owner_key.clone(), key.document_id.clone(), &doc.content).unwrap_err().is_not_found());
        prop_assert!(hasher.change_owner(&owner, key.owner_key.clone(), key.document_id.clone(), "x").unwrap_err().is_not_found());
        prop_assert!(hasher.verify_by_content(key.owner_key.clone(), key.document_id.clone(), &doc.content).unwrap_err().is_not_found());
    }

    #[test]
    fn failed_operations_leave_store_unchanged(o: OwnedDocument, policy in prop_oneof![
        Just(CreatePolicy::RejectExisting),
        Just(CreatePolicy::OwnerChecked),
    ]) {
        let hasher = hasher_with(HasherConfig::default().with_create_policy(policy));
        create(&hasher, &o.doc);
        let key = &o.doc.key;
        let owner = o.doc.owner();
        let before = hasher.describe(&owner, key.owner_key.clone(), key.document_id.clone()).unwrap();

        prop_assert!(hasher.update(&o.stranger, key.owner_key.clone(), key.document_id.clone(), &o.next_content).is_err());
        prop_assert!(hasher.change_owner(&o.stranger, key.owner_key.clone(), key.document_id.clone(), o.stranger.clone()).is_err());
        prop_assert!(hasher.create(&o.stranger, key.owner_key.clone(), key.document_id.clone(), &o.next_content).is_err());

        let after = hasher.describe(&owner, key.owner_key.clone(), key.document_id.clone()).unwrap();
        prop_assert_eq!(before, after);
        prop_assert_eq!(hasher.len().unwrap(), 1);
    }
}
