mod appointment;
mod appointment_status;
mod role;
mod user;
