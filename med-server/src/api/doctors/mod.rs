pub mod doctor_dto;
pub mod doctors;
