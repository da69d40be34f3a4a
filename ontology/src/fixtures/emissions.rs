//! Minimal emissions ontology: one company emitting one scope.
//!
//! `Company` is keyed by `LEI`; `Scope1` is a shared identity keyed by
//! `label` and `period` whose `tonsCO2Eq` belongs on the `emits` edge.

/// Company → Scope1 emissions ontology.
pub const EMISSIONS: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/esg#> .

:Company a owl:Class ;
    rdfs:label "Company" .

:Scope1 a owl:Class ;
    rdfs:label "Scope 1 emissions" .

:LEI a owl:DatatypeProperty ;
    rdfs:domain :Company ;
    rdfs:range  xsd:string .

:label a owl:DatatypeProperty ;
    rdfs:domain :Scope1 ;
    rdfs:range  xsd:string .

:period a owl:DatatypeProperty ;
    rdfs:domain :Scope1 ;
    rdfs:range  xsd:string .

:tonsCO2Eq a owl:DatatypeProperty ;
    rdfs:domain :Scope1 ;
    rdfs:range  xsd:decimal .

:emits a owl:ObjectProperty ;
    rdfs:domain :Company ;
    rdfs:range  :Scope1 .
"#;
