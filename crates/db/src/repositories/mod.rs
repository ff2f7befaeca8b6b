//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

mod lifecycle;

pub mod activity_instance_repo;
pub mod activity_repo;
pub mod activity_role_repo;
pub mod actor_repo;
pub mod assessment_instance_repo;
pub mod assessment_repo;
pub mod bci_instance_repo;
pub mod behavior_performance_repo;
pub mod block_instance_repo;
pub mod block_repo;
pub mod composed_of_repo;
pub mod content_repo;
pub mod event_repo;
pub mod goal_setting_repo;
pub mod interaction_repo;
pub mod intervention_repo;
pub mod medical_file_repo;
pub mod module_instance_repo;
pub mod module_repo;
pub mod patient_repo;
pub mod phase_instance_repo;
pub mod phase_repo;
pub mod professional_repo;
pub mod referral_repo;
pub mod reporting_repo;
pub mod role_repo;

pub use activity_instance_repo::ActivityInstanceRepo;
pub use activity_repo::ActivityRepo;
pub use activity_role_repo::{DevelopsRepo, RequiresRepo};
pub use actor_repo::ActorRepo;
pub use assessment_instance_repo::AssessmentInstanceRepo;
pub use assessment_repo::AssessmentRepo;
pub use bci_instance_repo::BciInstanceRepo;
pub use behavior_performance_repo::BehaviorPerformanceRepo;
pub use block_instance_repo::BlockInstanceRepo;
pub use block_repo::BlockRepo;
pub use composed_of_repo::ComposedOfRepo;
pub use content_repo::ContentRepo;
pub use event_repo::EventRepo;
pub use goal_setting_repo::GoalSettingRepo;
pub use interaction_repo::InteractionRepo;
pub use intervention_repo::InterventionRepo;
pub use medical_file_repo::MedicalFileRepo;
pub use module_instance_repo::ModuleInstanceRepo;
pub use module_repo::ModuleRepo;
pub use patient_repo::PatientRepo;
pub use phase_instance_repo::PhaseInstanceRepo;
pub use phase_repo::PhaseRepo;
pub use professional_repo::ProfessionalRepo;
pub use referral_repo::ReferralRepo;
pub use reporting_repo::ReportingRepo;
pub use role_repo::RoleRepo;
