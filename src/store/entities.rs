//! Per-entity store bindings
//!
//! Slot names, request application, patch merges and seed datasets for
//! every stored entity kind.

use crate::models::*;
use crate::store::StoredEntity;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl StoredEntity for Client {
    const SLOT: &'static str = "clients";
    const KIND: &'static str = "client";

    type Create = CreateClientRequest;
    type Update = UpdateClientRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            document: req.document,
            company: req.company,
            client_type: req.client_type,
            address: req.address,
            is_active: req.is_active,
            notes: req.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(email) = req.email {
            self.email = Some(email);
        }
        if let Some(phone) = req.phone {
            self.phone = Some(phone);
        }
        if let Some(document) = req.document {
            self.document = Some(document);
        }
        if let Some(company) = req.company {
            self.company = Some(company);
        }
        if let Some(client_type) = req.client_type {
            self.client_type = client_type;
        }
        if let Some(address) = req.address {
            self.address = Some(address);
        }
        if let Some(is_active) = req.is_active {
            self.is_active = is_active;
        }
        if let Some(notes) = req.notes {
            self.notes = Some(notes);
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn seed() -> Vec<Self> {
        let now = Utc::now();
        vec![
            Client {
                id: fresh_id(),
                name: "Roberto Silva".to_string(),
                email: Some("roberto.silva@example.com".to_string()),
                phone: Some("+55 11 98765-4321".to_string()),
                document: Some("123.456.789-00".to_string()),
                company: None,
                client_type: ClientType::Private,
                address: None,
                is_active: true,
                notes: None,
                created_at: now,
                updated_at: now,
            },
            Client {
                id: fresh_id(),
                name: "Prefeitura Municipal".to_string(),
                email: Some("obras@prefeitura.gov.br".to_string()),
                phone: None,
                document: Some("12.345.678/0001-90".to_string()),
                company: None,
                client_type: ClientType::Government,
                address: None,
                is_active: true,
                notes: Some("Public works contracts".to_string()),
                created_at: now,
                updated_at: now,
            },
        ]
    }
}

impl StoredEntity for ActivityLog {
    const SLOT: &'static str = "activity_logs";
    const KIND: &'static str = "activity log";

    type Create = CreateActivityLogRequest;
    type Update = UpdateActivityLogRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            date: req.date,
            project_name: req.project_name,
            weather: req.weather,
            team_count: req.team_count,
            activities: req.activities,
            materials: req.materials,
            equipment: req.equipment,
            status: req.status,
            notes: req.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(date) = req.date {
            self.date = date;
        }
        if let Some(project_name) = req.project_name {
            self.project_name = project_name;
        }
        if let Some(weather) = req.weather {
            self.weather = weather;
        }
        if let Some(team_count) = req.team_count {
            self.team_count = team_count;
        }
        if let Some(activities) = req.activities {
            self.activities = activities;
        }
        if let Some(materials) = req.materials {
            self.materials = materials;
        }
        if let Some(equipment) = req.equipment {
            self.equipment = equipment;
        }
        if let Some(status) = req.status {
            self.status = status;
        }
        if let Some(notes) = req.notes {
            self.notes = Some(notes);
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl StoredEntity for Measurement {
    const SLOT: &'static str = "measurements";
    const KIND: &'static str = "measurement";

    type Create = CreateMeasurementRequest;
    type Update = UpdateMeasurementRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            measurement_number: req.measurement_number,
            project_name: req.project_name,
            client_id: req.client_id,
            reference_date: req.reference_date,
            status: req.status,
            items: req.items,
            retention_percentage: req.retention_percentage,
            subtotal: 0.0,
            retention_amount: 0.0,
            net_value: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(measurement_number) = req.measurement_number {
            self.measurement_number = measurement_number;
        }
        if let Some(project_name) = req.project_name {
            self.project_name = project_name;
        }
        if let Some(client_id) = req.client_id {
            self.client_id = Some(client_id);
        }
        if let Some(reference_date) = req.reference_date {
            self.reference_date = reference_date;
        }
        if let Some(status) = req.status {
            self.status = status;
        }
        if let Some(items) = req.items {
            self.items = items;
        }
        if let Some(retention_percentage) = req.retention_percentage {
            self.retention_percentage = retention_percentage;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn normalize(&mut self) {
        self.recompute_totals();
    }
}

impl StoredEntity for Planning {
    const SLOT: &'static str = "plannings";
    const KIND: &'static str = "planning";

    type Create = CreatePlanningRequest;
    type Update = UpdatePlanningRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            project_name: req.project_name,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status,
            total_budget: req.total_budget,
            tasks: req.tasks,
            overall_progress: req.overall_progress,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(project_name) = req.project_name {
            self.project_name = project_name;
        }
        if let Some(start_date) = req.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = req.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = req.status {
            self.status = status;
        }
        if let Some(total_budget) = req.total_budget {
            self.total_budget = total_budget;
        }
        if let Some(tasks) = req.tasks {
            self.tasks = tasks;
        }
        if let Some(overall_progress) = req.overall_progress {
            self.overall_progress = overall_progress;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn normalize(&mut self) {
        self.recompute_progress();
    }
}

impl StoredEntity for PhotoTracking {
    const SLOT: &'static str = "photo_trackings";
    const KIND: &'static str = "photo tracking";

    type Create = CreatePhotoTrackingRequest;
    type Update = UpdatePhotoTrackingRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            project_name: req.project_name,
            category: req.category,
            photos: req.photos,
            photo_count: 0,
            tags: req.tags,
            description: req.description,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(project_name) = req.project_name {
            self.project_name = project_name;
        }
        if let Some(category) = req.category {
            self.category = category;
        }
        if let Some(photos) = req.photos {
            self.photos = photos;
        }
        if let Some(tags) = req.tags {
            self.tags = tags;
        }
        if let Some(description) = req.description {
            self.description = Some(description);
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn normalize(&mut self) {
        self.normalize_photos();
    }
}

impl StoredEntity for Reminder {
    const SLOT: &'static str = "reminders";
    const KIND: &'static str = "reminder";

    type Create = CreateReminderRequest;
    type Update = UpdateReminderRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text: req.text,
            due_date: req.due_date,
            priority: req.priority,
            completed: false,
            created_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(text) = req.text {
            self.text = text;
        }
        if let Some(due_date) = req.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = req.priority {
            self.priority = priority;
        }
        if let Some(completed) = req.completed {
            self.completed = completed;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    // Reminders carry no updatedAt
    fn touch(&mut self, _now: DateTime<Utc>) {}

    fn seed() -> Vec<Self> {
        let now = Utc::now();
        vec![Reminder {
            id: fresh_id(),
            text: "Review pending measurements".to_string(),
            due_date: now + Duration::days(7),
            priority: Priority::Medium,
            completed: false,
            created_at: now,
        }]
    }
}

impl StoredEntity for Input {
    const SLOT: &'static str = "inputs";
    const KIND: &'static str = "input";

    type Create = CreateInputRequest;
    type Update = UpdateInputRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: req.name,
            unit: req.unit,
            unit_price: req.unit_price,
            category: req.category,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(unit) = req.unit {
            self.unit = unit;
        }
        if let Some(unit_price) = req.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(category) = req.category {
            self.category = category;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn seed() -> Vec<Self> {
        let now = Utc::now();
        let input = |name: &str, unit: &str, unit_price: f64, category: InputCategory| Input {
            id: fresh_id(),
            name: name.to_string(),
            unit: unit.to_string(),
            unit_price,
            category,
            created_at: now,
            updated_at: now,
        };
        vec![
            input("Cement CP-II 50kg", "bag", 32.90, InputCategory::Material),
            input("Medium sand", "m3", 120.00, InputCategory::Material),
            input("Bricklayer", "h", 25.00, InputCategory::Labor),
            input("Concrete mixer 400L", "h", 15.00, InputCategory::Equipment),
        ]
    }
}

impl StoredEntity for Composition {
    const SLOT: &'static str = "compositions";
    const KIND: &'static str = "composition";

    type Create = CreateCompositionRequest;
    type Update = UpdateCompositionRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            code: req.code,
            name: req.name,
            unit: req.unit,
            items: req.items,
            unit_cost: req.unit_cost,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(code) = req.code {
            self.code = code;
        }
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(unit) = req.unit {
            self.unit = unit;
        }
        if let Some(items) = req.items {
            self.items = items;
        }
        if let Some(unit_cost) = req.unit_cost {
            self.unit_cost = unit_cost;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn seed() -> Vec<Self> {
        let now = Utc::now();
        vec![Composition {
            id: fresh_id(),
            code: "COMP-001".to_string(),
            name: "Ceramic brick masonry".to_string(),
            unit: "m2".to_string(),
            items: Vec::new(),
            unit_cost: 98.50,
            created_at: now,
            updated_at: now,
        }]
    }
}

impl StoredEntity for Budget {
    const SLOT: &'static str = "budgets";
    const KIND: &'static str = "budget";

    type Create = CreateBudgetRequest;
    type Update = UpdateBudgetRequest;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            client_id: req.client_id,
            project_name: req.project_name,
            status: req.status,
            items: req.items,
            total_value: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, req: Self::Update) {
        if let Some(client_id) = req.client_id {
            self.client_id = Some(client_id);
        }
        if let Some(project_name) = req.project_name {
            self.project_name = project_name;
        }
        if let Some(status) = req.status {
            self.status = status;
        }
        if let Some(items) = req.items {
            self.items = items;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn normalize(&mut self) {
        self.recompute_totals();
    }
}
