pub mod create_client;
pub mod delete_client;
pub mod update_client;
