pub mod koch;
