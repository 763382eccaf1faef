use crate::config::CheckOptions;
use crate::display::format_summary;
use crate::error::CheckError;
use crate::filter::SoundexFilter;
use crate::integrity::ConsistencyChecker;
use crate::store::{Database, Family, FamilyId, Gender, MediaObject, Name, Person, PersonId, Relationship};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: CheckError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// Python ints are unbounded; anything past u32 would wrap onto an existing record.
fn person_id(index: usize) -> PyResult<PersonId> {
    PersonId::from_index(index).ok_or_else(|| PyValueError::new_err(format!("Person index {} is out of range", index)))
}

fn family_id(index: usize) -> PyResult<FamilyId> {
    FamilyId::from_index(index).ok_or_else(|| PyValueError::new_err(format!("Family index {} is out of range", index)))
}

#[pyclass(name = "_Database")]
#[derive(Debug, Clone, Default)]
pub struct PyDatabase {
    inner: Database,
}

#[pymethods]
impl PyDatabase {
    #[new]
    pub fn new() -> Self { Self::default() }

    #[pyo3(signature = (first_name, surname, gender="unknown"))]
    pub fn add_person(&mut self, first_name: String, surname: String, gender: &str) -> usize {
        let person = Person::new(Name::new(first_name, surname), Gender::parse(gender));
        self.inner.add_person(person).index()
    }

    #[pyo3(signature = (father=None, mother=None, relationship=None))]
    pub fn add_family(&mut self, father: Option<usize>, mother: Option<usize>, relationship: Option<String>) -> PyResult<usize> {
        let father = father.map(person_id).transpose()?;
        let mother = mother.map(person_id).transpose()?;
        let rel = relationship.map(Relationship).unwrap_or_default();
        let id = self.inner.add_family(Family::new(None, None, rel));
        if let Err(e) = self.inner.set_parents(id, father, mother) {
            self.inner.delete_family(id);
            return Err(to_py_err(e));
        }
        Ok(id.index())
    }

    pub fn add_child(&mut self, family: usize, person: usize) -> PyResult<()> {
        self.inner.add_child(family_id(family)?, person_id(person)?).map_err(to_py_err)
    }

    #[pyo3(signature = (person, family=None))]
    pub fn set_main_family(&mut self, person: usize, family: Option<usize>) -> PyResult<()> {
        let family = family.map(family_id).transpose()?;
        self.inner.set_main_family(person_id(person)?, family).map_err(to_py_err)
    }

    pub fn add_alt_family(&mut self, person: usize, family: usize, relation: String) -> PyResult<()> {
        self.inner.add_alt_family(person_id(person)?, family_id(family)?, relation).map_err(to_py_err)
    }

    pub fn add_media(&mut self, path: String) -> usize {
        self.inner.add_media(MediaObject::new(path)).index()
    }

    pub fn main_family(&self, person: usize) -> PyResult<Option<usize>> {
        let id = person_id(person)?;
        let person = self.inner.person(id).ok_or_else(|| to_py_err(CheckError::UnknownPerson(id)))?;
        Ok(person.main_family.map(|f| f.index()))
    }

    pub fn children(&self, family: usize) -> PyResult<Vec<usize>> {
        let id = family_id(family)?;
        let family = self.inner.family(id).ok_or_else(|| to_py_err(CheckError::UnknownFamily(id)))?;
        Ok(family.children.iter().map(|c| c.index()).collect())
    }

    pub fn has_family(&self, family: usize) -> bool {
        FamilyId::from_index(family).is_some_and(|id| self.inner.family(id).is_some())
    }

    pub fn family_count(&self) -> usize { self.inner.family_count() }
    pub fn person_count(&self) -> usize { self.inner.person_count() }
    pub fn is_modified(&self) -> bool { self.inner.is_modified() }

    /// Runs the check-and-repair tool. Returns `(summary_text, report_json)`.
    #[pyo3(signature = (options=None))]
    pub fn check(&mut self, options: Option<&str>) -> PyResult<(String, String)> {
        let options = match options {
            Some(text) => CheckOptions::from_json(text).map_err(to_py_err)?,
            None => CheckOptions::default(),
        };
        let report = ConsistencyChecker::new(&mut self.inner).with_options(options).run();
        let json = report.to_json().map_err(to_py_err)?;
        Ok((format_summary(&self.inner, &report), json))
    }

    #[pyo3(signature = (text, invert=false))]
    pub fn match_soundex(&self, text: String, invert: bool) -> Vec<usize> {
        let mut filter = SoundexFilter::new(text);
        if invert {
            filter = filter.inverted();
        }
        filter.apply(&self.inner).into_iter().map(|id| id.index()).collect()
    }
}

#[pyfunction]
pub fn soundex(text: &str) -> String {
    crate::filter::soundex(text)
}
