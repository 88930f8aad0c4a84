pub mod controller {
    pub mod appointment_email {
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
}

pub mod infra {
    pub mod axum;
    pub mod error;
}

pub mod routes;
pub mod state;
