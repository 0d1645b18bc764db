use kernel::prelude::entity::{CarSpec, RegistrationNumber};

pub struct ListCarsDto {
    pub search: Option<String>,
}

pub struct GetCarDto {
    pub registration: RegistrationNumber,
}

pub struct CreateCarDto {
    pub spec: CarSpec,
}

pub struct UpdateCarDto {
    pub registration: RegistrationNumber,
    pub spec: CarSpec,
}

pub struct DeleteCarDto {
    pub registration: RegistrationNumber,
}
