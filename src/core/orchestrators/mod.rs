mod lookup_orchestrator;

pub use lookup_orchestrator::LookupOrchestrator;
