use super::CourseService;
use crate::client::CourseScope;
use crate::errors::Result;
use crate::models::courses::responses::CourseView;

pub async fn list_courses(service: &CourseService, scope: CourseScope) -> Result<Vec<CourseView>> {
    let raw = service.backend().fetch_courses(scope).await?;
    let courses: Vec<CourseView> = raw.into_iter().map(CourseView::from).collect();

    tracing::debug!("memuat {} mata pelajaran", courses.len());
    Ok(courses)
}
