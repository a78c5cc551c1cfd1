use super::{ApiError, Backend, StudentPayload};
use crate::model::Student;
use std::sync::{Arc, Mutex};

/// Which backend operation to fail on next use. Cleared automatically once
/// the failure has been delivered, so a test can verify the retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

struct Inner {
    students: Vec<Student>,
    next_id: i64,
    failures: Vec<Op>,
}

/// In-process backend with the same observable contract as the HTTP one:
/// ids assigned on create, 404-shaped errors for unknown ids. Clones share
/// the store, so a test can keep a handle after boxing one into `AppState`.
#[derive(Clone)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(students: Vec<Student>) -> Self {
        let next_id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(Inner {
                students,
                next_id,
                failures: Vec::new(),
            })),
        }
    }

    /// Arrange for the next call of `op` to fail with a 500-shaped error.
    pub fn fail_next(&self, op: Op) {
        self.lock().failures.push(op);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn check_failure(inner: &mut Inner, op: Op) -> Result<(), ApiError> {
        if let Some(pos) = inner.failures.iter().position(|f| *f == op) {
            inner.failures.remove(pos);
            return Err(ApiError::Status {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("student {id} not found"),
    }
}

impl Backend for MemoryBackend {
    fn list(&self) -> Result<Vec<Student>, ApiError> {
        let mut inner = self.lock();
        Self::check_failure(&mut inner, Op::List)?;
        Ok(inner.students.clone())
    }

    fn get(&self, id: i64) -> Result<Student, ApiError> {
        let mut inner = self.lock();
        Self::check_failure(&mut inner, Op::Get)?;
        inner
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn create(&self, payload: &StudentPayload) -> Result<Student, ApiError> {
        let mut inner = self.lock();
        Self::check_failure(&mut inner, Op::Create)?;
        let student = Student {
            id: inner.next_id,
            name: payload.name.clone(),
            age: payload.age,
            grade: payload.grade.clone(),
        };
        inner.next_id += 1;
        inner.students.push(student.clone());
        Ok(student)
    }

    fn update(&self, id: i64, payload: &StudentPayload) -> Result<Student, ApiError> {
        let mut inner = self.lock();
        Self::check_failure(&mut inner, Op::Update)?;
        let slot = inner
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(id))?;
        slot.name = payload.name.clone();
        slot.age = payload.age;
        slot.grade = payload.grade.clone();
        Ok(slot.clone())
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut inner = self.lock();
        Self::check_failure(&mut inner, Op::Delete)?;
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        if inner.students.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
