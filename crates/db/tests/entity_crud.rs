//! Repository-level CRUD round-trips for the people and catalog tables.

use sqlx::PgPool;
use uuid::Uuid;

use bci_db::models::actor::{CreateActor, UpdateActor};
use bci_db::models::intervention::{CreateIntervention, CreatePhase, UpdateIntervention};
use bci_db::models::patient::{CreateMedicalFile, CreatePatient};
use bci_db::models::role::CreateRole;
use bci_db::repositories::{
    ActorRepo, InterventionRepo, MedicalFileRepo, PatientRepo, PhaseRepo, RoleRepo,
};

async fn seed_actor(pool: &PgPool) -> i64 {
    ActorRepo::create(
        pool,
        &CreateActor {
            first_name: "Test".into(),
            last_name: "Actor".into(),
            email: None,
            phone: None,
            birth_date: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn actor_crud_roundtrip(pool: PgPool) {
    let actor = ActorRepo::create(
        &pool,
        &CreateActor {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: Some("ada@example.org".into()),
            phone: None,
            birth_date: None,
        },
    )
    .await
    .unwrap();

    // Partial update only touches the provided fields.
    let updated = ActorRepo::update(
        &pool,
        actor.id,
        &UpdateActor {
            first_name: None,
            last_name: None,
            email: None,
            phone: Some("+31600000000".into()),
            birth_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.phone.as_deref(), Some("+31600000000"));
    assert!(updated.updated_at >= actor.updated_at);

    assert!(ActorRepo::delete(&pool, actor.id).await.unwrap());
    assert!(ActorRepo::find_by_id(&pool, actor.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patient_pseudonym_is_unique_per_enrollment(pool: PgPool) {
    let actor_a = seed_actor(&pool).await;
    let actor_b = seed_actor(&pool).await;

    let a = PatientRepo::create(
        &pool,
        &CreatePatient {
            actor_id: actor_a,
            enrolled_at: None,
        },
    )
    .await
    .unwrap();
    let b = PatientRepo::create(
        &pool,
        &CreatePatient {
            actor_id: actor_b,
            enrolled_at: None,
        },
    )
    .await
    .unwrap();

    assert_ne!(a.pseudonym, b.pseudonym);
    assert_ne!(a.pseudonym, Uuid::nil());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_patient_per_actor(pool: PgPool) {
    let actor_id = seed_actor(&pool).await;
    let input = CreatePatient {
        actor_id,
        enrolled_at: None,
    };

    PatientRepo::create(&pool, &input).await.unwrap();
    let err = PatientRepo::create(&pool, &input).await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn medical_file_lookup_is_patient_scoped(pool: PgPool) {
    let actor_a = seed_actor(&pool).await;
    let actor_b = seed_actor(&pool).await;
    let patient_a = PatientRepo::create(
        &pool,
        &CreatePatient {
            actor_id: actor_a,
            enrolled_at: None,
        },
    )
    .await
    .unwrap();
    let patient_b = PatientRepo::create(
        &pool,
        &CreatePatient {
            actor_id: actor_b,
            enrolled_at: None,
        },
    )
    .await
    .unwrap();

    let file = MedicalFileRepo::create(
        &pool,
        patient_a.id,
        &CreateMedicalFile {
            title: "Intake".into(),
            notes: None,
            recorded_by: None,
            recorded_at: None,
        },
    )
    .await
    .unwrap();

    assert!(MedicalFileRepo::find_by_id(&pool, patient_a.id, file.id)
        .await
        .unwrap()
        .is_some());
    assert!(MedicalFileRepo::find_by_id(&pool, patient_b.id, file.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn intervention_defaults_to_draft(pool: PgPool) {
    let intervention = InterventionRepo::create(
        &pool,
        &CreateIntervention {
            name: "Smoking Cessation".into(),
            description: None,
            status_id: None,
            created_by: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(intervention.status_id, 1);

    let updated = InterventionRepo::update(
        &pool,
        intervention.id,
        &UpdateIntervention {
            name: None,
            description: Some("12-week program".into()),
            status_id: Some(2),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.status_id, 2);
    assert_eq!(updated.name, "Smoking Cessation");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn phase_ordering_follows_sequence_index(pool: PgPool) {
    let intervention = InterventionRepo::create(
        &pool,
        &CreateIntervention {
            name: "Ordered".into(),
            description: None,
            status_id: None,
            created_by: None,
        },
    )
    .await
    .unwrap();

    for (name, seq) in [("Late", 2), ("Early", 1)] {
        PhaseRepo::create(
            &pool,
            intervention.id,
            &CreatePhase {
                name: name.into(),
                description: None,
                sequence_index: seq,
            },
        )
        .await
        .unwrap();
    }

    let phases = PhaseRepo::list_by_intervention(&pool, intervention.id)
        .await
        .unwrap();
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[0].name, "Early");
    assert_eq!(phases[1].name, "Late");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_role_name_is_rejected(pool: PgPool) {
    let input = CreateRole {
        name: "Self-efficacy".into(),
        description: None,
    };

    RoleRepo::create(&pool, &input).await.unwrap();
    let err = RoleRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}
