use garde::Validate;
use serde::Deserialize;

use application::transfer::{CreateCarDto, DeleteCarDto, GetCarDto, ListCarsDto, UpdateCarDto};
use kernel::prelude::entity::{
    CarMake, CarModel, CarSpec, FuelEfficiency, ImageUrl, PassengerCount, RegistrationNumber,
    RentPerDay,
};

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    #[garde(length(min = 1))]
    registration: String,
    #[garde(length(min = 1))]
    model: String,
    #[serde(default)]
    #[garde(skip)]
    make: Option<String>,
    #[garde(range(min = 0, max = 10_000_000))]
    rent_per_day: i64,
    #[garde(range(min = 0.0))]
    fuel_efficiency: f64,
    #[garde(range(min = 1))]
    passenger_count: u32,
    #[serde(default)]
    #[garde(skip)]
    image_url: String,
}

impl From<CarRequest> for CarSpec {
    fn from(value: CarRequest) -> Self {
        CarSpec::new(
            RegistrationNumber::new(value.registration.trim()),
            CarModel::new(value.model.trim()),
            value
                .make
                .filter(|make| !make.trim().is_empty())
                .map(|make| CarMake::new(make.trim())),
            RentPerDay::new(value.rent_per_day),
            FuelEfficiency::new(value.fuel_efficiency),
            PassengerCount::new(value.passenger_count),
            ImageUrl::new(value.image_url),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct ListCarsRequest {
    search: Option<String>,
}

#[derive(Debug)]
pub struct GetCarRequest {
    registration: String,
}

impl GetCarRequest {
    pub fn new(registration: String) -> Self {
        Self { registration }
    }
}

#[derive(Debug)]
pub struct DeleteCarRequest {
    registration: String,
}

impl DeleteCarRequest {
    pub fn new(registration: String) -> Self {
        Self { registration }
    }
}

pub struct CarTransformer;

impl Intake<ListCarsRequest> for CarTransformer {
    type To = ListCarsDto;
    fn emit(&self, input: ListCarsRequest) -> Self::To {
        ListCarsDto {
            search: input.search,
        }
    }
}

impl Intake<GetCarRequest> for CarTransformer {
    type To = GetCarDto;
    fn emit(&self, input: GetCarRequest) -> Self::To {
        GetCarDto {
            registration: RegistrationNumber::new(input.registration),
        }
    }
}

impl Intake<DeleteCarRequest> for CarTransformer {
    type To = DeleteCarDto;
    fn emit(&self, input: DeleteCarRequest) -> Self::To {
        DeleteCarDto {
            registration: RegistrationNumber::new(input.registration),
        }
    }
}

impl TryIntake<CarRequest> for CarTransformer {
    type To = CreateCarDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CarRequest) -> Result<Self::To, Self::Error> {
        input.validate()?;
        Ok(CreateCarDto { spec: input.into() })
    }
}

impl TryIntake<(String, CarRequest)> for CarTransformer {
    type To = UpdateCarDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (String, CarRequest)) -> Result<Self::To, Self::Error> {
        let (registration, input) = input;
        input.validate()?;
        Ok(UpdateCarDto {
            registration: RegistrationNumber::new(registration),
            spec: input.into(),
        })
    }
}
