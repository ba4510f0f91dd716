pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod integration {
        pub mod integrand;
        pub mod integrationerror;
        pub mod integrationresult;
        pub mod integrationrequest;
        pub mod evaluationcontext;
        pub mod tanhsinhkernel;
        pub mod transformdispatcher;
        pub mod tanhsinhquadrature;
        pub mod quadraturemanager;
        mod proptests;
    }
}

pub use math::integration::integrand::Integrand;
pub use math::integration::integrationerror::IntegrationError;
pub use math::integration::integrationresult::IntegrationResult;
pub use math::integration::tanhsinhquadrature::TanhSinhQuadrature;
pub use math::integration::transformdispatcher::integrate;
