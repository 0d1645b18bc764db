use error_stack::Report;

use kernel::interface::query::{CarQuery, DependOnCarQuery};
use kernel::interface::update::{CarModifier, DependOnCarModifier};
use kernel::prelude::entity::Car;
use kernel::KernelError;

use crate::transfer::{CreateCarDto, DeleteCarDto, GetCarDto, ListCarsDto, UpdateCarDto};

#[async_trait::async_trait]
pub trait GetCarService: 'static + Sync + Send + DependOnCarQuery {
    async fn list_cars(&self, dto: ListCarsDto) -> error_stack::Result<Vec<Car>, KernelError> {
        let cars = self.car_query().find_all().await?;
        Ok(match dto.search {
            Some(term) => cars.into_iter().filter(|car| car.matches(&term)).collect(),
            None => cars,
        })
    }

    async fn get_car(&self, dto: GetCarDto) -> error_stack::Result<Option<Car>, KernelError> {
        self.car_query()
            .find_by_registration(&dto.registration)
            .await
    }
}

impl<T> GetCarService for T where T: DependOnCarQuery {}

#[async_trait::async_trait]
pub trait HandleCarService: 'static + Sync + Send + DependOnCarModifier {
    async fn add_car(&self, dto: CreateCarDto) -> error_stack::Result<(), KernelError> {
        if *dto.spec.rent_per_day().as_ref() < 0 {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("rent per day cannot be negative".to_string()));
        }
        self.car_modifier().create(&dto.spec).await?;
        tracing::info!(registration = %dto.spec.registration().as_ref(), "car added");
        Ok(())
    }

    async fn update_car(&self, dto: UpdateCarDto) -> error_stack::Result<(), KernelError> {
        if *dto.spec.rent_per_day().as_ref() < 0 {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable("rent per day cannot be negative".to_string()));
        }
        self.car_modifier()
            .update(&dto.registration, &dto.spec)
            .await
    }

    async fn remove_car(&self, dto: DeleteCarDto) -> error_stack::Result<(), KernelError> {
        self.car_modifier().delete(&dto.registration).await?;
        tracing::info!(registration = %dto.registration.as_ref(), "car removed");
        Ok(())
    }
}

impl<T> HandleCarService for T where T: DependOnCarModifier {}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use kernel::interface::query::{CarQuery, DependOnCarQuery};
    use kernel::interface::update::{CarModifier, DependOnCarModifier};
    use kernel::prelude::entity::{
        Car, CarId, CarMake, CarModel, CarSpec, FuelEfficiency, ImageUrl, PassengerCount,
        RegistrationNumber, RentPerDay,
    };
    use kernel::KernelError;

    use super::{GetCarService, HandleCarService};
    use crate::transfer::{CreateCarDto, DeleteCarDto, GetCarDto, ListCarsDto};

    fn spec(registration: &str, model: &str, make: Option<&str>, rent: i64) -> CarSpec {
        CarSpec::new(
            RegistrationNumber::new(registration),
            CarModel::new(model),
            make.map(CarMake::new),
            RentPerDay::new(rent),
            FuelEfficiency::new(15.0),
            PassengerCount::new(4),
            ImageUrl::new("https://img.example/car.png"),
        )
    }

    #[derive(Default)]
    struct Fleet {
        cars: Vec<Car>,
        removed: Mutex<Vec<RegistrationNumber>>,
    }

    #[async_trait::async_trait]
    impl CarQuery for Fleet {
        async fn find_all(&self) -> error_stack::Result<Vec<Car>, KernelError> {
            Ok(self.cars.clone())
        }

        async fn find_by_registration(
            &self,
            registration: &RegistrationNumber,
        ) -> error_stack::Result<Option<Car>, KernelError> {
            Ok(self
                .cars
                .iter()
                .find(|car| car.spec().registration() == registration)
                .cloned())
        }
    }

    #[async_trait::async_trait]
    impl CarModifier for Fleet {
        async fn create(&self, _: &CarSpec) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn update(
            &self,
            _: &RegistrationNumber,
            _: &CarSpec,
        ) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn delete(
            &self,
            registration: &RegistrationNumber,
        ) -> error_stack::Result<(), KernelError> {
            self.removed.lock().unwrap().push(registration.clone());
            Ok(())
        }
    }

    impl DependOnCarQuery for Fleet {
        type CarQuery = Self;
        fn car_query(&self) -> &Self::CarQuery {
            self
        }
    }

    impl DependOnCarModifier for Fleet {
        type CarModifier = Self;
        fn car_modifier(&self) -> &Self::CarModifier {
            self
        }
    }

    fn fleet() -> Fleet {
        Fleet {
            cars: vec![
                Car::new(CarId::new("1"), spec("CAA-1111", "Prius", Some("Toyota"), 9000)),
                Car::new(CarId::new("2"), spec("CAB-2222", "Civic", Some("Honda"), 8000)),
                Car::new(CarId::new("3"), spec("CAC-3333", "Axio", None, 6000)),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_filters_by_model_or_make() {
        let fleet = fleet();
        let all = fleet.list_cars(ListCarsDto { search: None }).await.unwrap();
        assert_eq!(all.len(), 3);

        let toyota = fleet
            .list_cars(ListCarsDto {
                search: Some("toyota".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(toyota.len(), 1);
        assert_eq!(toyota[0].spec().model(), &CarModel::new("Prius"));

        let none = fleet
            .list_cars(ListCarsDto {
                search: Some("lambo".to_string()),
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn get_by_registration() {
        let fleet = fleet();
        let found = fleet
            .get_car(GetCarDto {
                registration: RegistrationNumber::new("CAC-3333"),
            })
            .await
            .unwrap();
        assert_eq!(found.unwrap().id(), &CarId::new("3"));
    }

    #[tokio::test]
    async fn negative_rent_is_refused() {
        let fleet = fleet();
        let error = fleet
            .add_car(CreateCarDto {
                spec: spec("CAD-4444", "Vitz", None, -1),
            })
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), KernelError::Invalid));
    }

    #[tokio::test]
    async fn remove_passes_registration_through() {
        let fleet = fleet();
        fleet
            .remove_car(DeleteCarDto {
                registration: RegistrationNumber::new("CAB-2222"),
            })
            .await
            .unwrap();
        assert_eq!(
            *fleet.removed.lock().unwrap(),
            vec![RegistrationNumber::new("CAB-2222")]
        );
    }
}
