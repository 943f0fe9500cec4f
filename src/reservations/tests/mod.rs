// src/reservations/tests/mod.rs
