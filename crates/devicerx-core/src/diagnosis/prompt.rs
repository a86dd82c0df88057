use super::DiagnosisRequest;

/// Build the technician prompt for a diagnosis request.
///
/// All user input is embedded verbatim.
#[must_use]
pub fn build_prompt(request: &DiagnosisRequest) -> String {
    let specs = &request.specs;
    let tags = request
        .tags
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Act as a senior hardware technician. Diagnose the following device issue:\n\
         \n\
         Device Type: {device}\n\
         Brand/Model: {brand} {model}\n\
         Specs: CPU: {cpu}, RAM: {ram}, Storage: {storage}, Age: {age} years.\n\
         \n\
         User Reported Symptoms: {symptoms}\n\
         Symptom Tags: {tags}\n\
         \n\
         Provide a diagnosis, potential causes, and specifically focus on HARDWARE upgrades \
         (RAM, SSD, Battery) that would improve the situation.\n\
         Also estimate costs for parts. Be realistic about pricing.",
        device = request.device_type.label(),
        brand = specs.brand,
        model = specs.model,
        cpu = specs.processor,
        ram = specs.ram_label(),
        storage = specs.storage,
        age = specs.age_years,
        symptoms = request.symptoms,
        tags = tags,
    )
}
