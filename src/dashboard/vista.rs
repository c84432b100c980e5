//! Vista del dashboard como función pura
//!
//! `construir_vista(snapshot, estado, ahora)` re-filtra, re-ordena y
//! re-pagina desde cero en cada invocación: cada snapshot nuevo de la
//! fuente simplemente reemplaza al anterior, sin estado incremental.
//! El estado de UI es un valor inmutable con transiciones nombradas
//! (set-consulta, set-orden, set-pagina, alternar-menú).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dashboard::filtro::filtrar;
use crate::dashboard::orden::{ordenar, OrdenSpec};
use crate::dashboard::paginacion::{VehiculosDataSource, TAMANO_PAGINA_DEFECTO};
use crate::dto::dashboard_dto::PaginaDashboard;
use crate::models::vehiculo::EstadoFuente;

/// Estado de UI del dashboard: consulta, orden, paginación y menú.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEstado {
    /// Consulta de búsqueda, siempre plegada a minúsculas
    pub consulta: String,
    pub orden: OrdenSpec,
    pub pagina: usize,
    pub tamano_pagina: usize,
    pub menu_fijado: bool,
}

impl Default for DashboardEstado {
    fn default() -> Self {
        Self {
            consulta: String::new(),
            orden: OrdenSpec::default(),
            pagina: 0,
            tamano_pagina: TAMANO_PAGINA_DEFECTO,
            menu_fijado: false,
        }
    }
}

impl DashboardEstado {
    /// Transición set-consulta: pliega a minúsculas y vuelve a la primera
    /// página (la consulta cambia el universo de filas).
    pub fn con_consulta(mut self, consulta: &str) -> Self {
        self.consulta = consulta.to_lowercase();
        self.pagina = 0;
        self
    }

    /// Transición set-orden
    pub fn con_orden(mut self, orden: OrdenSpec) -> Self {
        self.orden = orden;
        self
    }

    /// Transición set-pagina; el tamaño ya viene validado por el caller
    pub fn con_pagina(mut self, pagina: Option<usize>, tamano_pagina: Option<usize>) -> Self {
        if let Some(p) = pagina {
            self.pagina = p;
        }
        if let Some(t) = tamano_pagina {
            self.tamano_pagina = t;
        }
        self
    }

    /// Transición alternar-menú (fijado <-> libre)
    pub fn alternar_menu(mut self) -> Self {
        self.menu_fijado = !self.menu_fijado;
        self
    }
}

/// Vista renderizable del dashboard según el estado del snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "estado", rename_all = "snake_case")]
pub enum VistaDashboard {
    /// La fuente aún no entregó datos: indicador de carga fijo
    Cargando,
    /// La fuente falló: estado fijo de error, sin reintento automático
    Error { mensaje: String },
    /// Página filtrada, ordenada y paginada
    Datos(PaginaDashboard),
}

/// Construir la vista a partir del último snapshot y el estado de UI.
///
/// Transformación referencialmente transparente: mismo snapshot, mismo
/// estado y mismo `ahora` producen siempre la misma página.
pub fn construir_vista(
    snapshot: &EstadoFuente,
    estado: &DashboardEstado,
    ahora: DateTime<Utc>,
) -> VistaDashboard {
    let vehiculos = match snapshot {
        EstadoFuente::Cargando => return VistaDashboard::Cargando,
        EstadoFuente::Error(mensaje) => {
            return VistaDashboard::Error {
                mensaje: mensaje.clone(),
            }
        }
        EstadoFuente::Datos(vehiculos) => vehiculos,
    };

    let mut filtrados = filtrar(vehiculos, &estado.consulta);
    ordenar(&mut filtrados, &estado.orden);

    let source = VehiculosDataSource::new(filtrados, ahora);

    VistaDashboard::Datos(PaginaDashboard {
        filas: source.pagina(estado.pagina, estado.tamano_pagina),
        total_filas: source.total_filas(),
        filas_seleccionadas: source.filas_seleccionadas(),
        pagina: estado.pagina,
        tamano_pagina: estado.tamano_pagina,
        consulta: estado.consulta.clone(),
        orden: estado.orden,
    })
}
