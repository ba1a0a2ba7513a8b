use super::value_objects::Record;

/// Copies the listed fields, in list order. Fields the record lacks are left
/// out rather than set to null.
pub fn project_record(record: &Record, fields: &[String]) -> Record {
    fields
        .iter()
        .filter_map(|field| {
            record
                .get(field)
                .map(|value| (field.clone(), value.clone()))
        })
        .collect()
}

pub fn project(records: &[&Record], fields: &[String]) -> Vec<Record> {
    records
        .iter()
        .map(|record| project_record(record, fields))
        .collect()
}
