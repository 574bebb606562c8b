//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain
//! documents and hold no business logic. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module.
//!
//! ```ignore
//! use aula::outbound::persistence::{DbPool, DieselStudentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/aula")).await?;
//! let students = DieselStudentRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_course_repository;
mod diesel_student_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_repository::DieselCourseRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
