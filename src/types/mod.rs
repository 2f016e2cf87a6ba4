// Types layer - All data structures
pub mod dto;
