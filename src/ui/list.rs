use crate::record::Record;
use bubbletea_widgets::Viewport;

/// Rows shown per page; the hosting pages all paginate in fives.
pub const PAGE_SIZE: usize = 5;

/// One display column: a header caption and the record field it reads.
#[derive(Clone, Debug)]
pub struct Column {
    pub header: String,
    pub field: String,
}

/// A per-row navigational action. `href` is a plain URL path with an `{id}`
/// placeholder; clicking it is a full page transition owned by the server.
#[derive(Clone, Debug)]
pub struct RowAction {
    pub label: String,
    pub href: String,
}

/// Everything that varies between list instances: the three hosting pages
/// share one controller and differ only in this configuration.
#[derive(Clone, Debug, Default)]
pub struct ListConfig {
    pub title: String,
    pub id_field: String,
    pub search_fields: Vec<String>,
    pub columns: Vec<Column>,
    pub actions: Vec<RowAction>,
    pub page_size: usize,
}

fn col(header: &str, field: &str) -> Column {
    Column {
        header: header.to_string(),
        field: field.to_string(),
    }
}

fn action(label: &str, href: &str) -> RowAction {
    RowAction {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn names(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

impl ListConfig {
    /// Admin view over practitioner accounts.
    pub fn practitioners() -> Self {
        ListConfig {
            title: "Professionals".to_string(),
            id_field: "practitioner_id".to_string(),
            search_fields: names(&["first_name", "last_name", "organization_name"]),
            columns: vec![
                col("Name", "first_name"),
                col("Surname", "last_name"),
                col("Gender", "gender"),
                col("Organization", "organization_name"),
                col("City", "organization_city"),
                col("Active", "active"),
            ],
            actions: vec![
                action("Edit", "/professional/edit/{id}"),
                action("Manage Subscription", "/professional/subscribe/{id}"),
                action("Clients Plan", "/professional/clients-plan/{id}"),
                action("Deactivate", "/professional/deactivate/{id}"),
                action("Activate", "/professional/activate/{id}"),
            ],
            page_size: PAGE_SIZE,
        }
    }

    /// Admin view over client accounts.
    pub fn clients_admin() -> Self {
        ListConfig {
            title: "Clients".to_string(),
            id_field: "patient_id".to_string(),
            search_fields: names(&["full_name", "birth_date"]),
            columns: vec![
                col("Name", "full_name"),
                col("Gender", "gender"),
                col("Birth date", "birth_date"),
                col("Active", "active"),
            ],
            actions: vec![
                action("Edit", "/client/edit/{id}"),
                action("Deactivate", "/client/deactivate/{id}"),
                action("Activate", "/client/activate/{id}"),
            ],
            page_size: PAGE_SIZE,
        }
    }

    /// A professional's own client roster.
    pub fn clients_dashboard() -> Self {
        ListConfig {
            title: "My Clients".to_string(),
            id_field: "patient_id".to_string(),
            search_fields: names(&["full_name", "birth_date"]),
            columns: vec![
                col("Name", "full_name"),
                col("Gender", "gender"),
                col("Birth date", "birth_date"),
                col("Active", "active"),
            ],
            actions: vec![
                action("Edit", "/client/edit/{id}"),
                action("New Quiz", "/client/quiz-start/{id}"),
                action("Care Chart", "/client/care-chart/{id}"),
                action("Messages", "/messages/{id}"),
            ],
            page_size: PAGE_SIZE,
        }
    }
}

/// Searchable, paginated view over an immutable record set. The set is loaded
/// once at construction; filtering only ever derives a new view from it.
#[derive(Clone, Debug, Default)]
pub struct ListModel {
    pub config: ListConfig,
    records: Vec<Record>,
    filtered: Vec<Record>,
    // raw keystrokes; the normalized query is derived on every change
    pub typed: String,
    pub query: String,
    // 1-based page cursor
    pub page: usize,
    pub screen_width: usize,
    pub screen_height: usize,
    // viewport using bubbletea widgets
    pub vp: Viewport,
}

impl ListModel {
    pub fn new(config: ListConfig, records: Vec<Record>) -> Self {
        let filtered = records.clone();
        ListModel {
            config,
            records,
            filtered,
            typed: String::new(),
            query: String::new(),
            page: 1,
            screen_width: 0,
            screen_height: 0,
            vp: Viewport::default(),
        }
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_list_update(self, msg);
    }

    /// Replaces the filter. The query is normalized (trim + lowercase), the
    /// view recomputed against the declared searchable fields, and the page
    /// cursor always reset to 1. An empty query restores the full set.
    pub fn set_filter(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.filtered = self
            .records
            .iter()
            .filter(|r| r.matches(&self.config.search_fields, &self.query))
            .cloned()
            .collect();
        self.page = 1;
    }

    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_count(&self) -> usize {
        if self.filtered.is_empty() {
            1
        } else {
            self.filtered.len().div_ceil(self.config.page_size)
        }
    }

    /// The current page of the view: `[(page-1)*size, page*size)`, naturally
    /// empty for out-of-range tails.
    pub fn page_rows(&self) -> &[Record] {
        let size = self.config.page_size;
        let start = (self.page.saturating_sub(1)).saturating_mul(size);
        if start >= self.filtered.len() {
            return &[];
        }
        let end = usize::min(start + size, self.filtered.len());
        &self.filtered[start..end]
    }

    /// Defensive no-op at page 1 even though the control is rendered disabled.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Defensive no-op past the last page even though the control is disabled.
    pub fn next_page(&mut self) {
        if self.next_enabled() {
            self.page += 1;
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page * self.config.page_size < self.filtered.len()
    }

    /// Expands an action's `{id}` placeholder with the record's identifier.
    pub fn action_href(&self, action: &RowAction, record: &Record) -> String {
        action.href.replace("{id}", &record.text(&self.config.id_field))
    }

    // Render helper wrappers that forward to the render module.
    pub fn render_rows(&self) -> String {
        crate::ui::render::table::render_rows(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_list_full(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(name: &str, id: usize) -> Record {
        match json!({
            "patient_id": id,
            "full_name": name,
            "gender": "female",
            "birth_date": "1990-01-01",
            "active": true,
        }) {
            serde_json::Value::Object(map) => Record::new(map),
            _ => unreachable!(),
        }
    }

    fn twelve_clients() -> ListModel {
        let records: Vec<Record> = (1..=12).map(|i| client(&format!("C{i}"), i)).collect();
        ListModel::new(ListConfig::clients_admin(), records)
    }

    fn page_names(m: &ListModel) -> Vec<String> {
        m.page_rows().iter().map(|r| r.text("full_name")).collect()
    }

    #[test]
    fn test_initial_view_is_full_set_on_page_one() {
        let m = twelve_clients();
        assert_eq!(m.page, 1);
        assert_eq!(m.filtered_len(), 12);
        assert_eq!(page_names(&m), vec!["C1", "C2", "C3", "C4", "C5"]);
        assert!(!m.prev_enabled());
        assert!(m.next_enabled());
    }

    #[test]
    fn test_end_to_end_paging_and_filter() {
        let mut m = twelve_clients();
        m.set_filter("");
        assert_eq!(page_names(&m), vec!["C1", "C2", "C3", "C4", "C5"]);
        m.next_page();
        assert_eq!(page_names(&m), vec!["C6", "C7", "C8", "C9", "C10"]);
        m.next_page();
        assert_eq!(page_names(&m), vec!["C11", "C12"]);
        assert!(!m.next_enabled());
        m.next_page();
        assert_eq!(m.page, 3, "next past the tail must be a no-op");
        m.set_filter("C1");
        assert_eq!(m.page, 1);
        let names: Vec<String> = m.filtered().iter().map(|r| r.text("full_name")).collect();
        assert_eq!(names, vec!["C1", "C10", "C11", "C12"]);
    }

    #[test]
    fn test_pagination_boundaries() {
        let mut m = twelve_clients();
        for _ in 0..10 {
            m.next_page();
        }
        assert_eq!(m.page, m.page_count());
        assert!(m.page <= 12usize.div_ceil(5));
        for _ in 0..10 {
            m.prev_page();
        }
        assert_eq!(m.page, 1);
        m.prev_page();
        assert_eq!(m.page, 1, "previous on page 1 must be a no-op");
    }

    #[test]
    fn test_no_page_renders_empty_except_empty_view() {
        let mut m = twelve_clients();
        m.set_filter("C1");
        // 4 matches -> single page, never an empty slice
        assert_eq!(m.page_rows().len(), 4);
        m.set_filter("zzz");
        assert_eq!(m.filtered_len(), 0);
        assert_eq!(m.page, 1);
        assert!(m.page_rows().is_empty());
        assert_eq!(m.page_count(), 1);
        assert!(!m.prev_enabled() && !m.next_enabled());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut m = twelve_clients();
        m.set_filter("c1");
        let first: Vec<String> = m.filtered().iter().map(|r| r.text("full_name")).collect();
        m.next_page();
        m.set_filter("c1");
        let second: Vec<String> = m.filtered().iter().map(|r| r.text("full_name")).collect();
        assert_eq!(first, second);
        assert_eq!(m.page, 1, "repeating the same filter still resets the page");
    }

    #[test]
    fn test_filter_case_insensitive_and_trimmed() {
        let mut m = ListModel::new(
            ListConfig::clients_admin(),
            vec![client("Ahmed Ali", 1), client("Sara", 2)],
        );
        m.set_filter("ahmed");
        assert_eq!(m.filtered_len(), 1);
        m.set_filter("AHMED");
        assert_eq!(m.filtered_len(), 1);
        m.set_filter("  Ahmed  ");
        assert_eq!(m.filtered_len(), 1);
    }

    #[test]
    fn test_search_restricted_to_declared_fields() {
        let mut m = ListModel::new(
            ListConfig::clients_admin(),
            vec![client("Ahmed", 1), client("Sara", 2)],
        );
        // gender is not in clients' searchable fields
        m.set_filter("female");
        assert_eq!(m.filtered_len(), 0);
        m.set_filter("1990");
        assert_eq!(m.filtered_len(), 2, "birth_date is searchable");
    }

    #[test]
    fn test_action_href_substitutes_identifier() {
        let m = ListModel::new(ListConfig::clients_admin(), vec![client("Ahmed", 42)]);
        let rec = &m.filtered()[0];
        let edit = &m.config.actions[0];
        assert_eq!(m.action_href(edit, rec), "/client/edit/42");
    }

    #[test]
    fn test_instance_configs_differ_only_in_parameters() {
        let pro = ListConfig::practitioners();
        let adm = ListConfig::clients_admin();
        let dash = ListConfig::clients_dashboard();
        assert_eq!(pro.page_size, 5);
        assert_eq!(adm.page_size, 5);
        assert_eq!(dash.page_size, 5);
        assert_eq!(pro.id_field, "practitioner_id");
        assert_eq!(adm.id_field, "patient_id");
        assert_eq!(adm.search_fields, dash.search_fields);
        assert!(pro.search_fields.contains(&"organization_name".to_string()));
        assert!(dash.actions.iter().any(|a| a.href.contains("quiz-start")));
        assert!(!adm.actions.iter().any(|a| a.href.contains("quiz-start")));
    }
}
