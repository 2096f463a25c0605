// ==========================================
// Integration Test Helpers
// ==========================================
// Responsibility: shared builders, in-memory sources and API setup
// for the integration tests
// ==========================================

pub mod api_test_helper;
pub mod memory_sources;
pub mod test_data_builder;
