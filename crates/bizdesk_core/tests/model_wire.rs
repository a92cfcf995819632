use bizdesk_core::{Client, Job, JobPriority, JobStatus, NewJobRequest, Product, Record};

#[test]
fn client_uses_backend_field_names() {
    let mut client = Client::new("Ana Lopez", "ana@lopez.es", "600111222");
    client.id = Some(3);

    let json = serde_json::to_value(&client).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["nombre"], "Ana Lopez");
    assert_eq!(json["correoElectronico"], "ana@lopez.es");
    assert_eq!(json["telefono"], "600111222");
    assert!(json["direccion"].is_null());

    let decoded: Client = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, client);
}

#[test]
fn missing_optional_fields_decode_as_none() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "nombre": "Tornillo 4mm",
        "unidadMedida": "ud"
    }))
    .unwrap();
    assert_eq!(product.id, None);
    assert_eq!(product.description, None);
    assert_eq!(Product::KIND, "product");
}

#[test]
fn job_decodes_backend_payload() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": 12,
        "titulo": "Revision caldera",
        "descripcion": null,
        "fechaProgramada": "2026-02-23T10:15:30",
        "estado": "EN_PROCESO",
        "prioridad": "URGENTE",
        "cliente": {
            "id": 3,
            "nombre": "Ana Lopez",
            "correoElectronico": "ana@lopez.es",
            "telefono": "600111222",
            "direccion": "Calle Mayor 3"
        },
        "trabajador": { "id": 5, "nombre": "Pedro Gil" }
    }))
    .unwrap();

    assert_eq!(job.id, Some(12));
    assert_eq!(job.status, JobStatus::InProgress);
    assert_eq!(job.priority, JobPriority::Urgent);
    assert_eq!(job.priority.as_wire(), "URGENTE");
    assert_eq!(job.client.address.as_deref(), Some("Calle Mayor 3"));
    assert_eq!(job.worker.map(|worker| worker.name), Some("Pedro Gil".to_string()));
}

#[test]
fn job_tolerates_null_date_and_missing_enums() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "titulo": "Sin fecha",
        "fechaProgramada": null,
        "cliente": {
            "nombre": "Ana",
            "correoElectronico": "ana@x.es",
            "telefono": "600"
        }
    }))
    .unwrap();

    assert_eq!(job.scheduled_for, "");
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.priority, JobPriority::Medium);
    assert!(job.worker.is_none());
    assert_eq!(job.natural_key(), "Sin fecha");
}

#[test]
fn new_job_request_references_ids() {
    let request = NewJobRequest {
        title: "Cambiar ventana".to_string(),
        description: None,
        scheduled_for: "2026-02-24".to_string(),
        status: JobStatus::Pending,
        priority: JobPriority::Low,
        client_id: 3,
        worker_id: None,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["clienteId"], 3);
    assert!(json["trabajadorId"].is_null());
    assert_eq!(json["estado"], "PENDIENTE");
    assert_eq!(json["prioridad"], "BAJA");
    assert_eq!(json["fechaProgramada"], "2026-02-24");
}
