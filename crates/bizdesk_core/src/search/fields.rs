//! Searchable field lists per record kind.

use crate::model::client::Client;
use crate::model::job::Job;
use crate::model::product::Product;
use crate::model::worker::Worker;
use crate::search::text_filter::{FieldAccessor, Searchable};

impl Searchable for Client {
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] =
        &[client_name, client_email, client_phone, client_address];
}

impl Searchable for Worker {
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[worker_name, worker_email, worker_phone];
}

// Inventory search is by name only.
impl Searchable for Product {
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] = &[product_name];
}

impl Searchable for Job {
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>] =
        &[job_title, job_description, job_client_name, job_worker_name];
}

fn client_name(client: &Client) -> Option<&str> {
    Some(client.name.as_str())
}

fn client_email(client: &Client) -> Option<&str> {
    Some(client.email.as_str())
}

fn client_phone(client: &Client) -> Option<&str> {
    Some(client.phone.as_str())
}

fn client_address(client: &Client) -> Option<&str> {
    client.address.as_deref()
}

fn worker_name(worker: &Worker) -> Option<&str> {
    Some(worker.name.as_str())
}

fn worker_email(worker: &Worker) -> Option<&str> {
    worker.email.as_deref()
}

fn worker_phone(worker: &Worker) -> Option<&str> {
    worker.phone.as_deref()
}

fn product_name(product: &Product) -> Option<&str> {
    Some(product.name.as_str())
}

fn job_title(job: &Job) -> Option<&str> {
    Some(job.title.as_str())
}

fn job_description(job: &Job) -> Option<&str> {
    job.description.as_deref()
}

fn job_client_name(job: &Job) -> Option<&str> {
    Some(job.client.name.as_str())
}

fn job_worker_name(job: &Job) -> Option<&str> {
    job.worker.as_ref().map(|worker| worker.name.as_str())
}
