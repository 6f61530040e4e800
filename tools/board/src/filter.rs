use crate::model::WorkOrder;

/// Case-insensitive substring match over the description and the assignee's
/// first and last name. A blank query matches everything.
pub fn matches(work_order: &WorkOrder, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&query);

    contains(&work_order.description)
        || work_order
            .assigned_to
            .as_ref()
            .is_some_and(|user| contains(&user.first_name) || contains(&user.last_name))
}
