use bizdesk_core::{
    filter_records, filter_refs, Client, Job, JobBoardFilter, JobStatus, Product, TextQuery,
    Worker,
};

fn client(name: &str, email: &str, phone: &str, address: Option<&str>) -> Client {
    let mut client = Client::new(name, email, phone);
    client.address = address.map(str::to_string);
    client
}

fn sample_clients() -> Vec<Client> {
    vec![
        client("Ana Lopez", "ana@lopez.es", "600111222", Some("Calle Mayor 3")),
        client("Bruno Diaz", "bruno@taller.com", "611222333", None),
        client("Carla Ruiz", "carla@ruiz.es", "622333444", Some("Avenida del Puerto 12")),
        client("Ferreteria Mayor", "compras@ferreteria.es", "933000111", None),
    ]
}

#[test]
fn blank_query_returns_every_record_in_order() {
    let clients = sample_clients();
    for query in ["", " ", "\t\n  "] {
        assert_eq!(filter_records(&clients, query), clients, "query={query:?}");
    }
}

#[test]
fn query_matches_any_searchable_field() {
    let clients = sample_clients();

    let by_name = filter_records(&clients, "bruno");
    assert_eq!(by_name, vec![clients[1].clone()]);

    let by_email = filter_records(&clients, "@RUIZ.ES");
    assert_eq!(by_email, vec![clients[2].clone()]);

    let by_phone = filter_records(&clients, "9330");
    assert_eq!(by_phone, vec![clients[3].clone()]);

    let by_address = filter_records(&clients, "puerto");
    assert_eq!(by_address, vec![clients[2].clone()]);
}

#[test]
fn matches_across_fields_keep_input_order() {
    let clients = sample_clients();
    let hits = filter_refs(&clients, "mayor");
    let names = hits.iter().map(|client| client.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Ana Lopez", "Ferreteria Mayor"]);
}

#[test]
fn query_is_trimmed_before_matching() {
    let clients = sample_clients();
    assert_eq!(filter_records(&clients, "  carla  "), vec![clients[2].clone()]);
}

#[test]
fn absent_fields_are_skipped() {
    let clients = vec![client("Sin Direccion", "x@y.z", "1", None)];
    assert!(filter_records(&clients, "calle").is_empty());
}

#[test]
fn stored_values_are_not_normalized() {
    let clients = vec![client("  Taller  Norte ", "t@n.es", "0", None)];
    assert_eq!(filter_records(&clients, "  taller  ").len(), 1);
    assert!(TextQuery::new("taller  norte").matches(&clients[0]));
    assert!(!TextQuery::new("taller norte").matches(&clients[0]));
}

#[test]
fn matching_is_substring_not_token_based() {
    let clients = sample_clients();
    assert!(filter_records(&clients, "lopez ana").is_empty());
    assert_eq!(filter_records(&clients, "a lop").len(), 1);
}

#[test]
fn every_field_substring_finds_its_record() {
    let clients = sample_clients();
    for record in &clients {
        let mut fields = vec![record.name.clone(), record.email.clone(), record.phone.clone()];
        fields.extend(record.address.clone());
        for field in fields {
            let chars = field.chars().collect::<Vec<_>>();
            let middle = chars[1..chars.len() - 1].iter().collect::<String>();
            for query in [field.to_uppercase(), middle] {
                let hits = filter_records(&clients, &query);
                assert!(hits.contains(record), "query={query:?}");
            }
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let clients = sample_clients();
    for query in ["", "a", "es", "MAYOR", "zzz", "6"] {
        let once = filter_records(&clients, query);
        let twice = filter_records(&once, query);
        assert_eq!(once, twice, "query={query:?}");
    }
}

#[test]
fn filtering_does_not_touch_the_input() {
    let clients = sample_clients();
    let before = clients.clone();
    let _ = filter_records(&clients, "ana");
    assert_eq!(clients, before);
}

#[test]
fn products_are_searched_by_name_only() {
    let mut paint = Product::new("Pintura blanca", "l");
    paint.description = Some("Tornillo incluido".to_string());
    let screws = Product::new("Tornillo 4mm", "ud");
    let products = vec![paint, screws.clone()];

    assert_eq!(filter_records(&products, "tornillo"), vec![screws]);
}

#[test]
fn jobs_match_on_client_and_worker_names() {
    let ana = client("Ana Lopez", "ana@lopez.es", "600111222", None);
    let mut boiler = Job::new("Revision caldera", "2026-02-23", ana.clone());
    boiler.worker = Some(Worker::new("Pedro Gil"));
    let window = Job::new("Cambiar ventana", "2026-02-24", ana);
    let jobs = vec![boiler.clone(), window.clone()];

    assert_eq!(filter_records(&jobs, "pedro"), vec![boiler]);
    assert_eq!(filter_records(&jobs, "ana lopez").len(), 2);
    assert_eq!(filter_records(&jobs, "VENTANA"), vec![window]);
}

#[test]
fn job_board_splits_completed_from_the_rest() {
    let owner = client("Ana", "ana@x.es", "1", None);
    let statuses = [
        JobStatus::Pending,
        JobStatus::Completed,
        JobStatus::InProgress,
        JobStatus::Cancelled,
        JobStatus::Completed,
    ];
    let jobs = statuses
        .iter()
        .enumerate()
        .map(|(index, status)| {
            let mut job = Job::new(format!("job-{index}"), "", owner.clone());
            job.status = *status;
            job
        })
        .collect::<Vec<_>>();

    let titles = |board: JobBoardFilter| {
        board
            .apply(&jobs)
            .into_iter()
            .map(|job| job.title.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(JobBoardFilter::default(), JobBoardFilter::Pending);
    assert_eq!(titles(JobBoardFilter::Pending), vec!["job-0", "job-2", "job-3"]);
    assert_eq!(titles(JobBoardFilter::Completed), vec!["job-1", "job-4"]);
}
