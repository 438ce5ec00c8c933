pub mod fetch_hook;
