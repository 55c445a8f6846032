use std::sync::Arc;
use tracing::info;

use crate::domain::models::service::{
    Service, ANIMAL_TYPE_SUGGESTIONS, SERVICE_TYPE_SUGGESTIONS,
};
use crate::domain::ports::ServiceCatalogApi;
use crate::error::ClientError;

const MAX_SUGGESTIONS: usize = 5;

/// Form fields that can fail validation, for error-outline rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    ServiceName,
    AnimalTypes,
    LengthOfService,
    BaseRate,
    Categories,
    AdditionalRates,
}

#[derive(Debug, Default, PartialEq)]
pub struct ValidationErrors {
    pub fields: Vec<ServiceField>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Required-field validation run before any persistence call. Returns
/// every offending field rather than refusing silently.
pub fn validate_service(service: &Service) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if service.service_name.trim().is_empty() {
        errors.fields.push(ServiceField::ServiceName);
    }
    if service.animal_types.trim().is_empty() {
        errors.fields.push(ServiceField::AnimalTypes);
    }
    if service.length_of_service.trim().is_empty() {
        errors.fields.push(ServiceField::LengthOfService);
    }
    if service.rates.base_rate.trim().is_empty() {
        errors.fields.push(ServiceField::BaseRate);
    }
    if service.categories.is_empty() {
        errors.fields.push(ServiceField::Categories);
    }
    if service.rates.additional_rates.iter().any(|rate| {
        rate.label.trim().is_empty()
            || rate.value.trim().is_empty()
            || rate.description.trim().is_empty()
    }) {
        errors.fields.push(ServiceField::AdditionalRates);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Case-insensitive substring match over the known service names.
pub fn service_type_suggestions(input: &str) -> Vec<&'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();
    SERVICE_TYPE_SUGGESTIONS
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

/// Case-insensitive prefix match over the known animal types.
pub fn animal_type_suggestions(input: &str) -> Vec<&'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();
    ANIMAL_TYPE_SUGGESTIONS
        .iter()
        .filter(|s| s.to_lowercase().starts_with(&needle))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

/// Validates and creates. An invalid service never reaches the backend.
pub async fn add_service(
    api: &Arc<dyn ServiceCatalogApi>,
    service: Service,
) -> Result<Service, ClientError> {
    validate_service(&service).map_err(ClientError::FormValidation)?;
    let created = api.create(&service).await?;
    info!(name = %created.service_name, "service created");
    Ok(created)
}

/// Validates and updates the offering at `position`.
pub async fn update_service(
    api: &Arc<dyn ServiceCatalogApi>,
    position: usize,
    service: Service,
) -> Result<Service, ClientError> {
    validate_service(&service).map_err(ClientError::FormValidation)?;
    api.update(position, &service).await
}

pub async fn delete_service(
    api: &Arc<dyn ServiceCatalogApi>,
    position: usize,
) -> Result<(), ClientError> {
    api.delete(position).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::service::{NamedRate, ServiceRates};

    fn valid_service() -> Service {
        Service {
            service_name: "Dog Walking".to_string(),
            service_description: "Neighborhood walks".to_string(),
            animal_types: "Dogs".to_string(),
            length_of_service: "1 hr".to_string(),
            categories: vec!["Domestic".to_string()],
            rates: ServiceRates {
                base_rate: "20".to_string(),
                additional_animal_rate: "10".to_string(),
                holiday_rate: "25".to_string(),
                additional_rates: Vec::new(),
            },
        }
    }

    #[test]
    fn valid_service_passes() {
        assert!(validate_service(&valid_service()).is_ok());
    }

    #[test]
    fn missing_fields_are_enumerated() {
        let mut service = valid_service();
        service.animal_types = "  ".to_string();
        service.categories.clear();

        let errors = validate_service(&service).unwrap_err();
        assert_eq!(
            errors.fields,
            vec![ServiceField::AnimalTypes, ServiceField::Categories]
        );
    }

    #[test]
    fn incomplete_additional_rate_row_fails() {
        let mut service = valid_service();
        service.rates.additional_rates.push(NamedRate {
            label: "Holiday Surcharge".to_string(),
            value: "15".to_string(),
            description: String::new(),
        });

        let errors = validate_service(&service).unwrap_err();
        assert_eq!(errors.fields, vec![ServiceField::AdditionalRates]);
    }

    #[test]
    fn suggestions_are_filtered_and_capped() {
        assert_eq!(animal_type_suggestions("c"), vec!["Cat", "Cow", "Calf"]);
        assert!(animal_type_suggestions("").is_empty());

        let walking = service_type_suggestions("walk");
        assert_eq!(walking, vec!["Dog Walking"]);

        let all = service_type_suggestions("i");
        assert!(all.len() <= 5);
    }
}
