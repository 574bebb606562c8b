//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly.

diesel::table! {
    /// Course documents.
    cursos (id) {
        /// Storage identifier, exposed as `_id`.
        id -> Uuid,
        /// Business code, exposed as `id`.
        public_id -> Text,
        nombre -> Text,
        descripcion -> Text,
        /// Storage identifiers of enrolled students, in enrolment order.
        alumnos -> Array<Uuid>,
    }
}

diesel::table! {
    /// Student documents.
    alumnos (id) {
        /// Storage identifier, exposed as `_id`.
        id -> Uuid,
        /// Business code, exposed as `id`.
        public_id -> Text,
        nombre -> Text,
        apellido -> Text,
        /// Enrolment records as a JSON array of `{codigo, curso}` objects.
        cursos -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(alumnos, cursos);
